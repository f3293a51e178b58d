use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((390, 844)))
            .build()
            .context("failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluate a JS expression in the page and return its JSON value.
    pub fn evaluate(&self, expression: &str) -> Result<Value> {
        let object = self.tab.evaluate(expression, false)?;
        Ok(object.value.unwrap_or(Value::Null))
    }

    pub fn has_class(&self, selector: &str, class: &str) -> Result<bool> {
        let js = format!("document.querySelector({selector:?}).classList.contains({class:?})");
        Ok(self.evaluate(&js)?.as_bool().unwrap_or(false))
    }

    /// Poll `expression` until it is truthy or `timeout` passes.
    pub fn wait_for(&self, expression: &str, timeout: Duration) -> Result<()> {
        let step = Duration::from_millis(50);
        let mut waited = Duration::ZERO;
        while waited < timeout {
            if self.evaluate(expression)?.as_bool() == Some(true) {
                return Ok(());
            }
            std::thread::sleep(step);
            waited += step;
        }
        anyhow::bail!("timed out waiting for `{expression}`")
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}

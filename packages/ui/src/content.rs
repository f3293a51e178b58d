//! Site copy in every supported language.
//!
//! Entries rendered as plain text must not contain markup; entries rendered
//! with `dangerous_inner_html` may (line breaks, emphasis).

use crate::Lang;

/// One piece of copy with a variant per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub de: &'static str,
    pub fr: &'static str,
    pub en: &'static str,
}

impl Text {
    pub const fn new(de: &'static str, fr: &'static str, en: &'static str) -> Self {
        Self { de, fr, en }
    }

    pub fn get(self, lang: Lang) -> &'static str {
        match lang {
            Lang::De => self.de,
            Lang::Fr => self.fr,
            Lang::En => self.en,
        }
    }

    pub fn is_markup(self) -> bool {
        Lang::ALL.iter().any(|lang| self.get(*lang).contains('<'))
    }
}

pub const BRAND: &str = "Atelier Lumen";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: Text,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        href: "#services",
        label: Text::new("Leistungen", "Prestations", "Services"),
    },
    NavItem {
        href: "#about",
        label: Text::new("Über uns", "À propos", "About"),
    },
    NavItem {
        href: "#contact",
        label: Text::new("Kontakt", "Contact", "Contact"),
    },
];

pub const MENU_LABEL: &str = "Menu";

// Markup: rendered with inner HTML.
pub const HERO_TITLE: Text = Text::new(
    "Licht, das Räume<br>erzählen lässt",
    "La lumière qui fait<br>parler les espaces",
    "Light that lets<br>spaces speak",
);

pub const HERO_SUBTITLE: Text = Text::new(
    "Architektur- und Interieurfotografie aus Basel für die ganze Schweiz.",
    "Photographie d'architecture et d'intérieur depuis Bâle pour toute la Suisse.",
    "Architecture and interior photography from Basel, across Switzerland.",
);

pub const HERO_CTA: Text = Text::new("Projekt anfragen", "Demander un devis", "Start a project");

pub const SERVICES_TITLE: Text = Text::new("Leistungen", "Prestations", "Services");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: Text,
    pub body: Text,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: Text::new("Architektur", "Architecture", "Architecture"),
        body: Text::new(
            "Aussenaufnahmen bei natürlichem Licht, von der Dämmerung bis zur Mittagssonne.",
            "Prises de vue extérieures en lumière naturelle, de l'aube au plein midi.",
            "Exterior shoots in natural light, from dawn to midday sun.",
        ),
    },
    Service {
        title: Text::new("Interieur", "Intérieur", "Interiors"),
        body: Text::new(
            "Räume, Materialien und Details, ruhig und massstabsgetreu ins Bild gesetzt.",
            "Espaces, matériaux et détails, restitués avec calme et justesse.",
            "Rooms, materials and details, captured calmly and true to scale.",
        ),
    },
    Service {
        title: Text::new("Luftaufnahmen", "Vues aériennes", "Aerial"),
        body: Text::new(
            "Drohnenbilder für Lagepläne, Baufortschritt und Kontext.",
            "Images de drone pour plans de situation, suivi de chantier et contexte.",
            "Drone imagery for site plans, construction progress and context.",
        ),
    },
];

pub const ABOUT_TITLE: Text = Text::new("Über uns", "À propos", "About us");

// Markup: rendered with inner HTML.
pub const ABOUT_BODY: Text = Text::new(
    "Seit 2012 fotografieren wir Gebäude für Architekturbüros, Bauherren und Magazine. <strong>Jedes Projekt beginnt mit einem Rundgang vor Ort.</strong>",
    "Depuis 2012, nous photographions des bâtiments pour des bureaux d'architectes, des maîtres d'ouvrage et des magazines. <strong>Chaque projet commence par une visite sur place.</strong>",
    "Since 2012 we have photographed buildings for architects, developers and magazines. <strong>Every project starts with a walk through the site.</strong>",
);

pub const CONTACT_TITLE: Text = Text::new("Kontakt", "Contact", "Contact");

pub const CONTACT_BODY: Text = Text::new(
    "Erzählen Sie uns von Ihrem Projekt. Wir melden uns innert zwei Arbeitstagen.",
    "Parlez-nous de votre projet. Nous vous répondons sous deux jours ouvrables.",
    "Tell us about your project. We reply within two working days.",
);

pub const CONTACT_EMAIL: &str = "studio@atelier-lumen.ch";

pub const BACK_TO_TOP: Text = Text::new("Nach oben", "Haut de page", "Back to top");

pub const IMPRINT_LINK: Text = Text::new("Impressum", "Mentions légales", "Legal notice");

pub const IMPRINT_TITLE: Text = Text::new("Impressum", "Mentions légales", "Legal notice");

// Markup: rendered with inner HTML.
pub const IMPRINT_BODY: Text = Text::new(
    "Atelier Lumen GmbH<br>Rheingasse 12<br>4058 Basel, Schweiz",
    "Atelier Lumen Sàrl<br>Rheingasse 12<br>4058 Bâle, Suisse",
    "Atelier Lumen Ltd<br>Rheingasse 12<br>4058 Basel, Switzerland",
);

pub const IMPRINT_BACK: Text = Text::new("Zur Startseite", "Retour à l'accueil", "Back to home");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_picks_the_language() {
        assert_eq!(HERO_CTA.get(Lang::De), "Projekt anfragen");
        assert_eq!(HERO_CTA.get(Lang::Fr), "Demander un devis");
        assert_eq!(HERO_CTA.get(Lang::En), "Start a project");
    }

    #[test]
    fn markup_entries_are_the_ones_rendered_as_html() {
        assert!(HERO_TITLE.is_markup());
        assert!(ABOUT_BODY.is_markup());
        assert!(IMPRINT_BODY.is_markup());

        let plain = [
            HERO_SUBTITLE,
            HERO_CTA,
            SERVICES_TITLE,
            ABOUT_TITLE,
            CONTACT_TITLE,
            CONTACT_BODY,
            BACK_TO_TOP,
            IMPRINT_LINK,
            IMPRINT_TITLE,
            IMPRINT_BACK,
        ];
        for text in plain
            .into_iter()
            .chain(NAV_ITEMS.iter().map(|item| item.label))
            .chain(SERVICES.iter().flat_map(|s| [s.title, s.body]))
        {
            assert!(!text.is_markup(), "unexpected markup in {text:?}");
        }
    }

    #[test]
    fn nav_targets_are_fragments() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('#') && item.href.len() > 1);
        }
    }
}

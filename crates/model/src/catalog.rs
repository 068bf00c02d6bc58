//! Keyword-driven merchandising categorization.
//!
//! Product names in this catalog are Spanish retail copy ("Zapatillas Running
//! Blanco"); the keyword tables below mirror the store's naming conventions.

/// Inferred category/subcategory pair for a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categorization {
    pub category: &'static str,
    pub subcategory: &'static str,
}

pub const DEFAULT_CATEGORY: &str = "camisetas";
pub const DEFAULT_SUBCATEGORY: &str = "Casual";

// First match wins, so keyword order is part of the behavior.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("zapatillas", &["zapatillas"]),
    ("pantalones", &["pantalón", "shorts", "mallas", "joggers"]),
    ("camisetas", &["camiseta", "sudadera", "tank"]),
    (
        "accesorios",
        &["gorra", "riñonera", "mochila", "calcetines", "manguitos", "guantes"],
    ),
];

const SUBCATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("Running", &["running"]),
    ("Técnicas", &["dri-fit", "técnica"]),
    ("Cross Training", &["training"]),
    ("Cortos", &["shorts"]),
    ("Manga Larga", &["sudadera", "manga larga"]),
    ("Tank Top", &["tank"]),
    ("Mallas", &["mallas"]),
    ("Joggers", &["joggers"]),
    ("Gorras", &["gorra"]),
    ("Riñoneras", &["riñonera"]),
    ("Mochilas", &["mochila"]),
    ("Calcetines", &["calcetines"]),
    ("Manguitos", &["manguitos"]),
    ("Guantes deportivos", &["guantes"]),
];

fn first_match(name: &str, table: &[(&'static str, &[&str])], fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(fallback)
}

/// Infers category and subcategory from a product name.
pub fn categorize(name: &str) -> Categorization {
    let name = name.to_lowercase();
    Categorization {
        category: first_match(&name, CATEGORY_KEYWORDS, DEFAULT_CATEGORY),
        subcategory: first_match(&name, SUBCATEGORY_KEYWORDS, DEFAULT_SUBCATEGORY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footwear_and_running_keywords() {
        let c = categorize("Zapatillas Running Blanco");
        assert_eq!(c.category, "zapatillas");
        assert_eq!(c.subcategory, "Running");
    }

    #[test]
    fn shorts_land_in_pantalones_cortos() {
        let c = categorize("Shorts Deportivos Azul");
        assert_eq!(c.category, "pantalones");
        assert_eq!(c.subcategory, "Cortos");
    }

    #[test]
    fn accessories_by_keyword() {
        assert_eq!(categorize("Gorra Azul").category, "accesorios");
        assert_eq!(categorize("Gorra Azul").subcategory, "Gorras");
        assert_eq!(categorize("Guantes de invierno").subcategory, "Guantes deportivos");
    }

    #[test]
    fn unknown_names_use_defaults() {
        let c = categorize("Vestido Elegante Negro");
        assert_eq!(c.category, DEFAULT_CATEGORY);
        assert_eq!(c.subcategory, DEFAULT_SUBCATEGORY);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(categorize("CAMISETA TÉCNICA").category, "camisetas");
        assert_eq!(categorize("CAMISETA TÉCNICA").subcategory, "Técnicas");
    }
}

//! The fixed category set offered by the catalog UI.
//!
//! Categories travel over the wire as free text and the server does not
//! enforce membership; this list is what the front end offers when creating
//! or filtering products.

/// Categories available for products, in display order.
pub const CATEGORIES: &[&str] = &[
    "Eletrônicos",
    "Informática",
    "Áudio",
    "Casa e Jardim",
    "Esportes",
    "Livros",
    "Roupas",
    "Beleza",
    "Automotivo",
    "Outros",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for category in CATEGORIES {
            assert!(seen.insert(category), "duplicate category: {category}");
        }
    }

    #[test]
    fn test_categories_non_empty() {
        assert_eq!(CATEGORIES.len(), 10);
        assert!(CATEGORIES.iter().all(|c| !c.is_empty()));
    }
}

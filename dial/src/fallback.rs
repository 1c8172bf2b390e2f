//! Built-in concept list used whenever the provider fails.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use crate::card::ConceptCard;

const FALLBACK_PAIRS: [(&str, &str); 15] = [
    ("Frio", "Quente"),
    ("Ruim", "Bom"),
    ("Feio", "Bonito"),
    ("Silencioso", "Barulhento"),
    ("Seco", "Molhado"),
    ("Sem Talento", "Talentoso"),
    ("Herói", "Vilão"),
    ("Normal", "Estranho"),
    ("Tempero Suave", "Apimentado"),
    ("Filme Ruim", "Filme Bom"),
    ("Lento", "Rápido"),
    ("Barato", "Caro"),
    ("Triste", "Feliz"),
    ("Antigo", "Moderno"),
    ("Fácil", "Difícil"),
];

/// The offline list, in a fixed order.
#[must_use]
pub fn fallback_cards() -> Vec<ConceptCard> {
    FALLBACK_PAIRS
        .iter()
        .map(|(left, right)| ConceptCard { left: (*left).to_owned(), right: (*right).to_owned() })
        .collect()
}

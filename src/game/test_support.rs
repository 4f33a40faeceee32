use crate::card::Card;

pub fn card(name: &str, range: i64) -> Card {
    Card {
        name: name.to_string(),
        num_engines: 2,
        max_pax: 100,
        range,
        cost: 50,
    }
}

pub fn numbered_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| card(&format!("Card {}", i), 100 * i as i64))
        .collect()
}

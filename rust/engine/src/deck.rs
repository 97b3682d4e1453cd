use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck, shuffled on construction and consumed by drawing.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a deck shuffled from an OS-random seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Builds a deck whose order is fully determined by `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Restores all 52 cards and reshuffles them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Draws up to `n` cards; fewer are returned only when the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }

    /// Removes known cards (e.g. already dealt elsewhere) from the undrawn
    /// part of the deck and returns what is left.
    pub fn remove_all(&mut self, cards: &[Card]) -> &[Card] {
        let mut rest = self.cards.split_off(self.position);
        rest.retain(|c| !cards.contains(c));
        self.cards.extend(rest);
        &self.cards[self.position..]
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

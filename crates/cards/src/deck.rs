// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::Hand;

/// Default number of cards dealt to each player.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Errors returned by cards and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card text has an unknown rank or suit token.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// The deck doesn't hold enough cards for a deal.
    #[error("insufficient cards: requested {requested}, available {available}")]
    InsufficientCards {
        /// Number of cards the deal needs.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
    /// A deck was built with a repeated card.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// A Poker card.
///
/// The text form is `"<rank> <suit>"`, for example `"King Pik"` or
/// `"10 Kier"`, and round-trips through [Display](fmt::Display) and
/// [FromStr]:
///
/// ```
/// # use drawpoker_cards::{Card, Rank, Suit};
/// let card = "As Trefl".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::Ace, Suit::Clubs));
/// assert_eq!(card.to_string(), "As Trefl");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({} {})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        let (rank, suit) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let rank = rank.parse::<Rank>().map_err(|_| invalid())?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the discriminant is the rank value with the Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value from 2 to 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank text token.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "As",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ranks()
            .find(|r| r.symbol() == s)
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))
    }
}

/// Card suit, suits have no ordering in a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (Karo).
    Diamonds,
    /// Hearts suit (Kier).
    Hearts,
    /// Spades suit (Pik).
    Spades,
    /// Clubs suit (Trefl).
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs].into_iter()
    }

    /// The suit text token.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Diamonds => "Karo",
            Suit::Hearts => "Kier",
            Suit::Spades => "Pik",
            Suit::Clubs => "Trefl",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::suits()
            .find(|suit| suit.symbol() == s)
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))
    }
}

/// A cards Deck.
///
/// Cards are dealt from the end of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck with the given cards, the last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CardError> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(CardError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws a card from the end of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `cards_per_player` cards to `num_players` players.
    ///
    /// Cards are drawn from the end of the deck one at a time around the
    /// players, the first player gets the first card, the second player the
    /// second card and so on. Fails without removing any card if the deck
    /// doesn't have enough cards.
    pub fn deal_hands(
        &mut self,
        num_players: usize,
        cards_per_player: usize,
    ) -> Result<Vec<Hand>, CardError> {
        let requested = num_players
            .checked_mul(cards_per_player)
            .unwrap_or(usize::MAX);
        if requested > self.cards.len() {
            return Err(CardError::InsufficientCards {
                requested,
                available: self.cards.len(),
            });
        }

        let mut hands = vec![Vec::with_capacity(cards_per_player); num_players];
        for _ in 0..cards_per_player {
            for hand in hands.iter_mut() {
                // Checked above.
                if let Some(card) = self.cards.pop() {
                    hand.push(card);
                }
            }
        }

        Ok(hands.into_iter().map(Hand::new).collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The remaining cards, the last card is the next to be dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards hand in the deck.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = Vec::with_capacity(k);

        loop {
            hand.clear();
            hand.extend(idx.iter().map(|&i| self.cards[i]));
            f(&hand);

            // Find the rightmost index that can still move right.
            let mut i = k;
            while i > 0 && idx[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            idx[i - 1] += 1;
            for j in i..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_has_all_cards() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.cards().iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                assert!(cards.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut deck = Deck::default();
        deck.shuffle(&mut StdRng::seed_from_u64(7));

        assert_eq!(deck.count(), Deck::SIZE);
        let cards = deck.cards().iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Same seed same order.
        let other = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.cards(), other.cards());
        assert_ne!(deck.cards(), Deck::default().cards());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Spades);
        assert_eq!(c.to_string(), "King Pik");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10 Kier");

        let c = Card::new(Rank::Ace, Suit::Diamonds);
        assert_eq!(c.to_string(), "As Karo");

        let c = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(c.to_string(), "2 Trefl");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!(
            " Queen Kier ".parse::<Card>(),
            Ok(Card::new(Rank::Queen, Suit::Hearts))
        );

        for text in ["", "King", "Ace Pik", "1 Kier", "King Hearts", "king Pik", "10  Kier"] {
            assert_eq!(
                text.parse::<Card>(),
                Err(CardError::InvalidCard(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Ten > Rank::Nine);
    }

    #[test]
    fn deal_round_robin() {
        let mut deck = Deck::default();
        let mut expected = deck.cards().to_vec();

        let hands = deck.deal_hands(4, DEFAULT_HAND_SIZE).unwrap();
        assert_eq!(deck.count(), 32);
        assert_eq!(hands.len(), 4);

        // Player i gets cards i, i + 4, i + 8.. from the end of the deck.
        expected.reverse();
        for (player, hand) in hands.iter().enumerate() {
            assert_eq!(hand.len(), DEFAULT_HAND_SIZE);
            for (idx, card) in hand.cards().iter().enumerate() {
                assert_eq!(*card, expected[idx * 4 + player]);
            }
        }

        let dealt = hands
            .iter()
            .flat_map(|h| h.cards().iter().copied())
            .collect::<HashSet<_>>();
        assert_eq!(dealt.len(), 20);
        assert!(deck.cards().iter().all(|c| !dealt.contains(c)));
    }

    #[test]
    fn deal_insufficient_cards() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let before = deck.cards().to_vec();

        let res = deck.deal_hands(11, 5);
        assert_eq!(
            res,
            Err(CardError::InsufficientCards {
                requested: 55,
                available: 52
            })
        );
        assert_eq!(deck.cards(), &before[..]);

        // Exactly the whole deck is fine.
        let hands = deck.deal_hands(4, 13).unwrap();
        assert_eq!(hands.len(), 4);
        assert!(deck.is_empty());
    }

    #[test]
    fn deal_overflowing_request() {
        let mut deck = Deck::default();

        let res = deck.deal_hands(usize::MAX, 2);
        assert_eq!(
            res,
            Err(CardError::InsufficientCards {
                requested: usize::MAX,
                available: Deck::SIZE
            })
        );
        assert_eq!(deck.count(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);

        let mut count = 0;
        deck.for_each(0, |_| count += 1);
        deck.for_each(53, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_from_cards() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let ah = Card::new(Rank::Ace, Suit::Hearts);

        let mut deck = Deck::from_cards(vec![ks, ah]).unwrap();
        assert_eq!(deck.draw(), Some(ah));
        assert_eq!(deck.draw(), Some(ks));
        assert_eq!(deck.draw(), None);

        assert_eq!(
            Deck::from_cards(vec![ks, ah, ks]).unwrap_err(),
            CardError::DuplicateCard(ks)
        );
    }
}

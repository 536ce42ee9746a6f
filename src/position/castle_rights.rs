//! Module for the `Castling` structure, the FEN-facing view of castling
//! eligibility.
//!
//! A [`Position`] tracks castling eligibility per rook square, as a `BitBoard`;
//! that is the representation the binary codec round-trips. `Castling` condenses
//! the four standard-chess rights into a u8 of bits for parsing and printing
//! the `KQkq` field of a FEN string, and converts both ways.
//!
//! [`Position`]: ../struct.Position.html

use core::bitboard::BitBoard;
use core::masks::*;
use core::sq::SQ;

use std::fmt;

const ALL_CASTLING: u8 = 0b0000_1111;

bitflags! {
    /// Structure to help with recognizing the various possibilities of castling.
    ///
    /// Keeps track of what sides are possible to castle from for each player.
    ///
    /// Does not guarantee that the player containing a castling bit can castle at that
    /// time. Rather marks that castling is a possibility, e.g. a Castling struct
    /// containing a bit marking WHITE_Q means that neither the White King or Queen-side
    /// rook has moved since the game started.
    pub struct Castling: u8 {
        const WHITE_K      = C_WHITE_K_MASK; // White has King-side Castling ability
        const WHITE_Q      = C_WHITE_Q_MASK; // White has Queen-side Castling ability
        const BLACK_K      = C_BLACK_K_MASK; // Black has King-side Castling ability
        const BLACK_Q      = C_BLACK_Q_MASK; // Black has Queen-side Castling ability
        const WHITE_ALL    = Self::WHITE_K.bits // White can castle for both sides
                           | Self::WHITE_Q.bits;
        const BLACK_ALL    = Self::BLACK_K.bits // Black can castle for both sides
                           | Self::BLACK_Q.bits;
    }
}

impl Castling {
    #[doc(hidden)]
    #[inline]
    pub const fn all_castling() -> Self {
        Castling { bits: ALL_CASTLING }
    }

    #[doc(hidden)]
    #[inline]
    pub const fn empty_set() -> Self {
        Castling { bits: 0 }
    }

    /// Condenses a set of castling-eligible rook squares into castling rights.
    /// Squares other than the four standard rook starting squares contribute
    /// nothing.
    pub fn from_rook_squares(rooks: BitBoard) -> Castling {
        let mut bits: u8 = 0;
        for sq in rooks {
            bits |= sq.castle_rights_mask();
        }
        Castling { bits }
    }

    /// Expands castling rights back into the set of standard rook starting
    /// squares they correspond to.
    pub fn rook_squares(self) -> BitBoard {
        let mut bb = BitBoard(0);
        if self.contains(Castling::WHITE_K) {
            bb |= SQ(ROOK_WHITE_KSIDE_START).to_bb();
        }
        if self.contains(Castling::WHITE_Q) {
            bb |= SQ(ROOK_WHITE_QSIDE_START).to_bb();
        }
        if self.contains(Castling::BLACK_K) {
            bb |= SQ(ROOK_BLACK_KSIDE_START).to_bb();
        }
        if self.contains(Castling::BLACK_Q) {
            bb |= SQ(ROOK_BLACK_QSIDE_START).to_bb();
        }
        bb
    }

    /// Returns if both players have lost their ability to castle
    #[inline]
    pub fn no_castling(self) -> bool {
        self.bits == 0
    }

    /// Adds the right to castle based on a `char`.
    ///
    /// ```md
    /// `K` -> Add White King-side Castling bit.
    /// `Q` -> Add White Queen-side Castling bit.
    /// `k` -> Add Black King-side Castling bit.
    /// `q` -> Add Black Queen-side Castling bit.
    /// `-` -> Do nothing.
    /// ```
    ///
    /// Returns `false` for any other character.
    pub fn add_castling_char(&mut self, c: char) -> bool {
        self.bits |= match c {
            'K' => Castling::WHITE_K.bits,
            'Q' => Castling::WHITE_Q.bits,
            'k' => Castling::BLACK_K.bits,
            'q' => Castling::BLACK_Q.bits,
            '-' => 0,
            _ => return false,
        };
        true
    }

    /// Returns a pretty String representing the castling state
    ///
    /// Used for FEN strings, with (`K` | `Q`) representing white castling abilities,
    /// and (`k` | `q`) representing black castling abilities. If there are no bits set,
    /// returns a String containing "-".
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            "-".to_owned()
        } else {
            let mut s = String::default();
            if self.contains(Castling::WHITE_K) {
                s.push('K');
            }
            if self.contains(Castling::WHITE_Q) {
                s.push('Q');
            }
            if self.contains(Castling::BLACK_K) {
                s.push('k');
            }
            if self.contains(Castling::BLACK_Q) {
                s.push('q');
            }
            assert!(!s.is_empty());
            s
        }
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

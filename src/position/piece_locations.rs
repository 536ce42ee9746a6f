//! Contains a structure that maps from squares of a board to the player / piece at that square.

use core::sq::SQ;
use core::{PieceType, Player};

/// Struct to allow fast lookups for any square. Given a square, allows for determining if there
/// is a piece currently there, and if so, allows for determining it's color and type of piece.
///
/// Piece Locations is a BLIND structure, providing a function of |sq| -> |Piece AND/OR Player|.
/// The reverse cannot be done: looking up squares from a piece / player.
#[derive(Clone)]
pub struct PieceLocations {
    // Pieces are represented by the following bit patterns:
    // x000 -> Pawn (P)
    // x001 -> Knight (N)
    // x010 -> Bishop (B)
    // x011 -> Rook (R)
    // x100 -> Queen (Q)
    // x101 -> King (K)
    // x111 -> None
    // 0xxx -> White Piece
    // 1xxx -> Black Piece

    // array of u8's, with standard ordering mapping index to square
    data: [u8; 64],
}

const EMPTY_SQ: u8 = 0b0111;

impl PieceLocations {
    /// Constructs a new `PieceLocations` with a default of no pieces on the board.
    pub fn blank() -> PieceLocations {
        PieceLocations {
            data: [EMPTY_SQ; 64],
        }
    }

    /// Places a given piece for a given player at a certain square.
    ///
    /// # Panics
    ///
    /// Panics if Square is of index higher than 63.
    #[inline]
    pub fn place(&mut self, square: SQ, player: Player, piece: PieceType) {
        assert!(square.is_okay());
        self.data[square.0 as usize] = self.create_sq(player, piece);
    }

    /// Removes a Square.
    ///
    /// # Panics
    ///
    /// Panics if Square is of index higher than 63.
    #[inline]
    pub fn remove(&mut self, square: SQ) {
        assert!(square.is_okay());
        self.data[square.0 as usize] = EMPTY_SQ;
    }

    /// Returns the Piece at a `SQ`, or None if the square is empty.
    ///
    /// # Panics
    ///
    /// Panics if square is of index higher than 63.
    #[inline]
    pub fn piece_at(&self, square: SQ) -> Option<PieceType> {
        assert!(square.is_okay());
        let byte: u8 = self.data[square.0 as usize] & 0b0111;
        match byte {
            0b0000 => Some(PieceType::P),
            0b0001 => Some(PieceType::N),
            0b0010 => Some(PieceType::B),
            0b0011 => Some(PieceType::R),
            0b0100 => Some(PieceType::Q),
            0b0101 => Some(PieceType::K),
            0b0111 => None,
            _ => unreachable!(),
        }
    }

    /// Returns the `Player` (if any) occupying a `SQ`.
    ///
    /// # Panics
    ///
    /// Panics if Square is of index higher than 63.
    #[inline]
    pub fn player_at(&self, square: SQ) -> Option<Player> {
        let byte: u8 = self.data[square.0 as usize];
        if byte == 0b0111 || byte == 0b1111 {
            return None;
        }
        if byte < 8 {
            Some(Player::White)
        } else {
            Some(Player::Black)
        }
    }

    /// Returns a Tuple of `(Player, PieceType)` of the player and associated piece at a
    /// given square. Returns None if the square is unoccupied.
    ///
    /// # Panics
    ///
    /// Panics if Square is of index higher than 63.
    #[inline]
    pub fn player_piece_at(&self, square: SQ) -> Option<(Player, PieceType)> {
        let byte: u8 = self.data[square.0 as usize];
        match byte {
            0b0000 => Some((Player::White, PieceType::P)),
            0b0001 => Some((Player::White, PieceType::N)),
            0b0010 => Some((Player::White, PieceType::B)),
            0b0011 => Some((Player::White, PieceType::R)),
            0b0100 => Some((Player::White, PieceType::Q)),
            0b0101 => Some((Player::White, PieceType::K)),
            0b0111 | 0b1111 => None,
            0b1000 => Some((Player::Black, PieceType::P)),
            0b1001 => Some((Player::Black, PieceType::N)),
            0b1010 => Some((Player::Black, PieceType::B)),
            0b1011 => Some((Player::Black, PieceType::R)),
            0b1100 => Some((Player::Black, PieceType::Q)),
            0b1101 => Some((Player::Black, PieceType::K)),
            _ => unreachable!(),
        }
    }

    /// Returns if a `SQ` is occupied.
    #[inline]
    pub fn at_square(&self, square: SQ) -> bool {
        assert!(square.is_okay());
        let byte: u8 = self.data[square.0 as usize];
        byte != 0b0111 && byte != 0b1111
    }

    /// Helper method to return the bit representation of a given piece and player.
    #[inline]
    fn create_sq(&self, player: Player, piece: PieceType) -> u8 {
        let mut loc: u8 = match piece {
            PieceType::P => 0b0000,
            PieceType::N => 0b0001,
            PieceType::B => 0b0010,
            PieceType::R => 0b0011,
            PieceType::Q => 0b0100,
            PieceType::K => 0b0101,
        };
        if player == Player::Black {
            loc |= 0b1000;
        }
        loc
    }
}

impl PartialEq for PieceLocations {
    fn eq(&self, other: &PieceLocations) -> bool {
        for sq in 0..64 {
            if self.data[sq] != other.data[sq] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::PieceLocations;
    use {PieceType, Player, SQ};

    #[test]
    fn piece_loc_blank() {
        let mut l = PieceLocations::blank();
        for s in 0..64 {
            assert!(l.piece_at(SQ(s)).is_none());
        }
        l.place(SQ(3), Player::White, PieceType::P);
        assert_eq!(l.piece_at(SQ(3)).unwrap(), PieceType::P);
        assert_eq!(l.player_at(SQ(3)).unwrap(), Player::White);
        assert_eq!(
            l.player_piece_at(SQ(3)).unwrap(),
            (Player::White, PieceType::P)
        );
        assert!(l.at_square(SQ(3)));
        for s in 0..64 {
            if s != 3 {
                assert!(l.piece_at(SQ(s)).is_none());
            }
        }
        l.place(SQ(3), Player::Black, PieceType::K);
        assert_eq!(l.piece_at(SQ(3)).unwrap(), PieceType::K);
        assert_eq!(l.player_at(SQ(3)).unwrap(), Player::Black);
        assert_eq!(
            l.player_piece_at(SQ(3)).unwrap(),
            (Player::Black, PieceType::K)
        );
        l.remove(SQ(3));
        for s in 0..64 {
            assert!(l.piece_at(SQ(s)).is_none());
        }
        let c = l.clone();
        assert!(c == l);
    }
}

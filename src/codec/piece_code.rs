//! The shared 4-bit piece code enumeration used by both directions of the
//! codec.
//!
//! The packed format spends one nibble per occupied square, which leaves room
//! for 16 codes. Twelve cover plain piece identities; the remaining four fold
//! auxiliary game state into the table so the format needs no separate fields
//! for it:
//!
//! ```md,ignore
//! 0-5   white pawn, knight, bishop, rook, queen, king
//! 6-11  black pawn, knight, bishop, rook, queen, king
//! 12    a pawn that just advanced two squares (the en-passant target sits
//!       one rank behind it)
//! 13    a white rook that is currently castling-eligible
//! 14    a black rook that is currently castling-eligible
//! 15    the black king, only when black is the side to move
//! ```

use core::{PieceType, Player};
use position::Position;
use SQ;

use std::mem::transmute;

/// A single entry of the 4-bit piece code table.
///
/// `Plain` codes carry nothing but the piece's identity. The other three
/// variants overload code space that plain identities never use, and carry an
/// extra fact about the position alongside the piece they imply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceCode {
    /// Codes 0-11: a piece with no auxiliary meaning.
    Plain(Player, PieceType),
    /// Code 12: a pawn that just advanced two squares. The piece's color and
    /// the en-passant target square are both recoverable from the pawn's rank.
    EnPassantPawn,
    /// Codes 13/14: a rook that is still castling-eligible.
    EligibleRook(Player),
    /// Code 15: the black king while black is the side to move.
    TurnMarkerKing,
}

impl PieceCode {
    /// Selects the code for the piece standing on `sq`.
    ///
    /// Code selection is priority-ordered; the first matching row of this
    /// table wins:
    ///
    /// 1. a pawn whose square sits directly in front of the position's
    ///    en-passant target encodes as `EnPassantPawn`,
    /// 2. a rook on a castling-eligible square encodes as `EligibleRook`,
    /// 3. the black king encodes as `TurnMarkerKing` when black is to move,
    /// 4. anything else keeps its plain identity.
    pub fn convert(pos: &Position, sq: SQ, player: Player, piece: PieceType) -> PieceCode {
        if piece == PieceType::P && pos.ep_square() == Some(sq.behind()) {
            return PieceCode::EnPassantPawn;
        }
        if piece == PieceType::R && pos.is_castle_rook(sq) {
            return PieceCode::EligibleRook(player);
        }
        if piece == PieceType::K && player == Player::Black && pos.turn() == Player::Black {
            return PieceCode::TurnMarkerKing;
        }
        PieceCode::Plain(player, piece)
    }

    /// Returns the 4-bit wire value of the code.
    #[inline]
    pub fn nibble(self) -> u8 {
        match self {
            PieceCode::Plain(player, piece) => piece as u8 + 6 * player as u8,
            PieceCode::EnPassantPawn => 12,
            PieceCode::EligibleRook(Player::White) => 13,
            PieceCode::EligibleRook(Player::Black) => 14,
            PieceCode::TurnMarkerKing => 15,
        }
    }

    /// Maps a 4-bit wire value back to its code. Total over `0..16`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not a nibble value.
    #[inline]
    pub fn from_nibble(bits: u8) -> PieceCode {
        assert!(bits < 16);
        match bits {
            0..=5 => PieceCode::Plain(Player::White, unsafe { transmute(bits) }),
            6..=11 => PieceCode::Plain(Player::Black, unsafe { transmute(bits - 6) }),
            12 => PieceCode::EnPassantPawn,
            13 => PieceCode::EligibleRook(Player::White),
            14 => PieceCode::EligibleRook(Player::Black),
            _ => PieceCode::TurnMarkerKing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ALL_PIECE_TYPES;
    use position::Position;

    #[test]
    fn nibble_mapping_total() {
        for bits in 0..16u8 {
            assert_eq!(PieceCode::from_nibble(bits).nibble(), bits);
        }
    }

    #[test]
    fn plain_code_arithmetic() {
        for (i, &piece) in ALL_PIECE_TYPES.iter().enumerate() {
            assert_eq!(PieceCode::Plain(Player::White, piece).nibble(), i as u8);
            assert_eq!(PieceCode::Plain(Player::Black, piece).nibble(), i as u8 + 6);
        }
    }

    #[test]
    fn ep_marker_beats_plain_pawn() {
        let mut pos = Position::empty();
        pos.place(SQ::E4, Player::White, PieceType::P);
        pos.set_ep_square(SQ::E3);
        assert_eq!(
            PieceCode::convert(&pos, SQ::E4, Player::White, PieceType::P),
            PieceCode::EnPassantPawn
        );
        // a pawn elsewhere keeps its plain identity
        pos.place(SQ::A2, Player::White, PieceType::P);
        assert_eq!(
            PieceCode::convert(&pos, SQ::A2, Player::White, PieceType::P),
            PieceCode::Plain(Player::White, PieceType::P)
        );
    }

    #[test]
    fn eligible_rook_beats_plain_rook() {
        let mut pos = Position::empty();
        pos.place(SQ::A1, Player::White, PieceType::R);
        pos.place(SQ::H8, Player::Black, PieceType::R);
        pos.set_castle_rook(SQ::A1);
        assert_eq!(
            PieceCode::convert(&pos, SQ::A1, Player::White, PieceType::R),
            PieceCode::EligibleRook(Player::White)
        );
        assert_eq!(
            PieceCode::convert(&pos, SQ::H8, Player::Black, PieceType::R),
            PieceCode::Plain(Player::Black, PieceType::R)
        );
    }

    #[test]
    fn turn_marker_only_when_black_to_move() {
        let mut pos = Position::empty();
        pos.place(SQ::E8, Player::Black, PieceType::K);
        assert_eq!(
            PieceCode::convert(&pos, SQ::E8, Player::Black, PieceType::K),
            PieceCode::Plain(Player::Black, PieceType::K)
        );
        pos.set_turn(Player::Black);
        assert_eq!(
            PieceCode::convert(&pos, SQ::E8, Player::Black, PieceType::K),
            PieceCode::TurnMarkerKing
        );
        // the white king never marks the turn
        pos.place(SQ::E1, Player::White, PieceType::K);
        assert_eq!(
            PieceCode::convert(&pos, SQ::E1, Player::White, PieceType::K),
            PieceCode::Plain(Player::White, PieceType::K)
        );
    }
}

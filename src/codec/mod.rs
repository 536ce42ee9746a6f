//! The codec between a [`Position`] and its fixed 24-byte packed
//! representation.
//!
//! # Layout
//!
//! A packed position is always exactly [`PACKED_BYTES`] (24) bytes:
//!
//! ```md,ignore
//! bytes 0-7    occupancy bitmap. Byte 0 holds rank 8, byte 7 holds rank 1;
//!              within each byte, bit 0 is file a and bit 7 is file h. A set
//!              bit marks an occupied square.
//! bytes 8-23   nibble stream. 32 four-bit slots, two per byte with the high
//!              nibble first. Slot k holds the piece code of the k-th occupied
//!              square in ascending square-index order. Slots past the last
//!              piece stay zero and are never read back.
//! ```
//!
//! The format carries no explicit square indexes: the pairing between squares
//! and codes exists only through the shared ascending iteration order of
//! [`BitBoard`]. The encoder emits codes in the order `BitBoard`'s iterator
//! yields squares, and the decoder pops the same bitmap's least significant
//! bits in lock-step with the stream.
//!
//! Side to move, castling eligibility and the en-passant target have no bytes
//! of their own; they ride inside the 4-bit piece codes. See [`piece_code`].
//!
//! # Examples
//!
//! ```
//! use fenpack::{Position, encode, decode};
//!
//! let pos = Position::start_pos();
//! let packed = encode(&pos).unwrap();
//! assert_eq!(decode(&packed).unwrap(), pos);
//! ```
//!
//! [`Position`]: ../position/struct.Position.html
//! [`BitBoard`]: ../core/bitboard/struct.BitBoard.html
//! [`PACKED_BYTES`]: constant.PACKED_BYTES.html
//! [`piece_code`]: piece_code/index.html

pub mod piece_code;

use self::piece_code::PieceCode;
use core::bitboard::BitBoard;
use core::sq::SQ;
use core::{PieceType, Player, Rank};
use position::Position;

/// The exact size of a packed position, in bytes.
pub const PACKED_BYTES: usize = 24;

/// The maximum number of pieces a chess position can hold, and therefore the
/// number of slots in the nibble stream.
pub const MAX_PIECES: usize = 32;

/// Represents possible errors encountered while packing or unpacking a
/// `Position`.
///
/// The wire format itself defines no error signaling; these cover the inputs
/// a well-formed encoder can never produce.
#[derive(Fail, Debug)]
pub enum PackError {
    /// The packed input is not exactly 24 bytes long.
    #[fail(display = "invalid packed length: {} bytes, expected 24", len)]
    InvalidLength { len: usize },
    /// The occupancy bitmap claims more pieces than a position can hold.
    #[fail(display = "occupancy bitmap holds {} pieces, maximum is 32", count)]
    InvalidPieceCount { count: u8 },
    /// Two squares carry the same single-use marker code.
    #[fail(display = "duplicate {} marker at {}", marker, sq)]
    AmbiguousState { marker: &'static str, sq: SQ },
    /// The position to encode holds more pieces than the stream has slots.
    #[fail(display = "position holds {} pieces, maximum is 32", count)]
    TooManyPieces { count: u8 },
}

/// Packs a position into its 24-byte representation.
///
/// Encoding is total for any position satisfying the 32-piece invariant;
/// a position with more occupied squares fails with
/// [`PackError::TooManyPieces`].
///
/// # Examples
///
/// ```
/// use fenpack::{Position, encode};
///
/// let packed = encode(&Position::start_pos()).unwrap();
/// assert_eq!(&packed[..8], &0xFFFF_0000_0000_FFFFu64.to_be_bytes());
/// ```
///
/// [`PackError::TooManyPieces`]: enum.PackError.html#variant.TooManyPieces
pub fn encode(pos: &Position) -> Result<[u8; PACKED_BYTES], PackError> {
    let occ = pos.occupied();
    let count = occ.count_bits();
    if count as usize > MAX_PIECES {
        return Err(PackError::TooManyPieces { count });
    }

    let mut packed = [0u8; PACKED_BYTES];
    for i in 0..8 {
        packed[i] = (occ.0 >> (56 - i * 8)) as u8;
    }

    // one nibble per occupied square, ascending square order, high nibble first
    for (slot, sq) in occ.enumerate() {
        let (player, piece) = pos
            .player_piece_at_sq(sq)
            .expect("occupancy desynced from piece locations");
        let code = PieceCode::convert(pos, sq, player, piece).nibble();
        let shift = if slot % 2 == 0 { 4 } else { 0 };
        packed[8 + slot / 2] |= code << shift;
    }

    Ok(packed)
}

/// Unpacks a 24-byte packed position back into a [`Position`].
///
/// The reconstruction starts from [`Position::empty`] (white to move, no
/// castling eligibility, no en-passant target) and only the observed marker
/// codes overwrite those defaults.
///
/// # Errors
///
/// * [`PackError::InvalidLength`] if `packed` is not exactly 24 bytes.
/// * [`PackError::InvalidPieceCount`] if the bitmap sets more than 32 bits.
/// * [`PackError::AmbiguousState`] if a second square claims the en-passant
///   marker (code 12) or the turn marker (code 15); both are single-use.
///
/// # Examples
///
/// ```
/// use fenpack::{decode, PackError};
///
/// match decode(&[0u8; 23]) {
///     Err(PackError::InvalidLength { len }) => assert_eq!(len, 23),
///     _ => panic!("short input must be rejected"),
/// }
/// ```
///
/// [`Position`]: ../position/struct.Position.html
/// [`Position::empty`]: ../position/struct.Position.html#method.empty
/// [`PackError::InvalidLength`]: enum.PackError.html#variant.InvalidLength
/// [`PackError::InvalidPieceCount`]: enum.PackError.html#variant.InvalidPieceCount
/// [`PackError::AmbiguousState`]: enum.PackError.html#variant.AmbiguousState
pub fn decode(packed: &[u8]) -> Result<Position, PackError> {
    if packed.len() != PACKED_BYTES {
        return Err(PackError::InvalidLength { len: packed.len() });
    }

    let mut occ_bits: u64 = 0;
    for i in 0..8 {
        occ_bits |= (packed[i] as u64) << (56 - i * 8);
    }
    let occ = BitBoard(occ_bits);
    let count = occ.count_bits();
    if count as usize > MAX_PIECES {
        return Err(PackError::InvalidPieceCount { count });
    }

    let mut pos = Position::empty();
    let mut turn_marked = false;

    // lock-step with the encoder: pop the lowest set bit, consume one nibble
    for (slot, sq) in occ.enumerate() {
        let byte = packed[8 + slot / 2];
        let nibble = if slot % 2 == 0 {
            byte >> 4
        } else {
            byte & 0b1111
        };
        match PieceCode::from_nibble(nibble) {
            PieceCode::Plain(player, piece) => pos.place(sq, player, piece),
            PieceCode::EnPassantPawn => {
                if pos.ep_square().is_some() {
                    return Err(PackError::AmbiguousState {
                        marker: "en-passant pawn",
                        sq,
                    });
                }
                // only a white double push lands on rank 4
                let player = if sq.rank() == Rank::R4 {
                    Player::White
                } else {
                    Player::Black
                };
                pos.place(sq, player, PieceType::P);
                pos.set_ep_square(sq.behind());
            }
            PieceCode::EligibleRook(player) => {
                pos.place(sq, player, PieceType::R);
                pos.set_castle_rook(sq);
            }
            PieceCode::TurnMarkerKing => {
                if turn_marked {
                    return Err(PackError::AmbiguousState {
                        marker: "black-to-move king",
                        sq,
                    });
                }
                turn_marked = true;
                pos.place(sq, Player::Black, PieceType::K);
                pos.set_turn(Player::Black);
            }
        }
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fen_pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn encode_is_fixed_size() {
        let positions = [
            Position::empty(),
            Position::start_pos(),
            fen_pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1"),
        ];
        for pos in positions.iter() {
            let packed = encode(pos).unwrap();
            assert_eq!(packed.len(), PACKED_BYTES);
        }
    }

    #[test]
    fn trailing_slots_stay_zero() {
        let pos = fen_pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let packed = encode(&pos).unwrap();
        // two pieces consume one byte of the stream
        for byte in packed[9..].iter() {
            assert_eq!(*byte, 0);
        }
    }

    #[test]
    fn high_nibble_first() {
        // white king on e1 (sq 4) precedes black king on e8 (sq 60)
        let pos = fen_pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let packed = encode(&pos).unwrap();
        assert_eq!(packed[8] >> 4, 5); // white king
        assert_eq!(packed[8] & 0b1111, 11); // black king, white to move
    }

    #[test]
    fn decode_rejects_bad_length() {
        for len in [0usize, 8, 23, 25, 48].iter() {
            let bytes = vec![0u8; *len];
            match decode(&bytes) {
                Err(PackError::InvalidLength { len: l }) => assert_eq!(l, *len),
                _ => panic!("length {} must be rejected", len),
            }
        }
    }

    #[test]
    fn decode_rejects_over_full_bitmap() {
        let mut packed = [0u8; PACKED_BYTES];
        for byte in packed[..8].iter_mut() {
            *byte = 0xFF; // 64 pieces
        }
        match decode(&packed) {
            Err(PackError::InvalidPieceCount { count }) => assert_eq!(count, 64),
            _ => panic!("over-full bitmap must be rejected"),
        }
    }

    #[test]
    fn decode_rejects_duplicate_turn_marker() {
        // two squares, both claiming code 15
        let mut packed = [0u8; PACKED_BYTES];
        packed[7] = 0b0000_0011; // a1 and b1 occupied
        packed[8] = 0xFF;
        match decode(&packed) {
            Err(PackError::AmbiguousState { sq, .. }) => assert_eq!(sq, SQ::B1),
            _ => panic!("duplicate turn marker must be rejected"),
        }
    }

    #[test]
    fn decode_rejects_duplicate_ep_marker() {
        let mut packed = [0u8; PACKED_BYTES];
        packed[4] = 0b0001_1000; // d4 and e4 occupied
        packed[8] = 0xCC; // both carry code 12
        match decode(&packed) {
            Err(PackError::AmbiguousState { sq, .. }) => assert_eq!(sq, SQ::E4),
            _ => panic!("duplicate en-passant marker must be rejected"),
        }
    }

    #[test]
    fn decode_empty_stream_defaults() {
        let packed = [0u8; PACKED_BYTES];
        let pos = decode(&packed).unwrap();
        assert_eq!(pos, Position::empty());
        assert_eq!(pos.turn(), Player::White);
        assert_eq!(pos.ep_square(), None);
        assert!(pos.castle_rook_squares().is_empty());
    }

    #[test]
    fn error_display_strings() {
        let e = PackError::InvalidLength { len: 12 };
        assert_eq!(
            format!("{}", e),
            "invalid packed length: 12 bytes, expected 24"
        );
        let e = PackError::InvalidPieceCount { count: 64 };
        assert_eq!(
            format!("{}", e),
            "occupancy bitmap holds 64 pieces, maximum is 32"
        );
        let e = PackError::TooManyPieces { count: 33 };
        assert_eq!(format!("{}", e), "position holds 33 pieces, maximum is 32");
        let e = PackError::AmbiguousState {
            marker: "en-passant pawn",
            sq: SQ::E4,
        };
        assert_eq!(format!("{}", e), "duplicate en-passant pawn marker at e4");
    }

    #[test]
    fn encode_rejects_over_full_position() {
        let mut pos = Position::empty();
        for sq in 0..33u8 {
            pos.place(SQ(sq), Player::White, PieceType::P);
        }
        match encode(&pos) {
            Err(PackError::TooManyPieces { count }) => assert_eq!(count, 33),
            _ => panic!("33 pieces must be rejected"),
        }
    }
}

//! This module contains [`Position`], the object representing a complete chess
//! game state: piece placement, side to move, castling eligibility and the
//! en-passant target.
//!
//! `Position` is deliberately minimal. It holds and exposes state; it performs
//! no legality checking, move generation, or move application. It is the value
//! the [`codec`] reads when encoding and produces when decoding, and it can be
//! converted to and from FEN strings for interoperability.
//!
//! This module also contains structures used by the position, such as
//! [`Castling`] for the FEN-facing view of castling rights, and
//! [`PieceLocations`] for square-to-piece lookups.
//!
//! [`Position`]: struct.Position.html
//! [`Castling`]: castle_rights/struct.Castling.html
//! [`PieceLocations`]: piece_locations/struct.PieceLocations.html
//! [`codec`]: ../codec/index.html

pub mod castle_rights;
pub mod piece_locations;

use core::bitboard::BitBoard;
use core::masks::*;
use core::sq::SQ;
use core::{PieceType, Player};

use self::castle_rights::Castling;
use self::piece_locations::PieceLocations;

use std::char;
use std::fmt;

/// FEN string of the standard chess starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Represents possible errors encountered while building a `Position` from a fen string.
#[derive(Fail, Debug)]
pub enum FenBuildError {
    #[fail(display = "invalid number of fen sections: {}, expected at least 4", sections)]
    NotEnoughSections { sections: usize },
    #[fail(display = "invalid number of ranks: {}, expected 8", ranks)]
    IncorrectRankAmounts { ranks: usize },
    #[fail(display = "invalid turn: {}, expected 'w' or 'b'", turn)]
    UnrecognizedTurn { turn: String },
    #[fail(display = "unrecognized castling character: {}", castling)]
    UnrecognizedCastling { castling: char },
    #[fail(display = "unreadable En-passant square: {}", ep)]
    EPSquareUnreadable { ep: String },
    #[fail(display = "invalid En-passant square: {}", ep)]
    EPSquareInvalid { ep: String },
    #[fail(display = "too many squares in rank {}", rank)]
    SquareLargerRank { rank: usize },
    #[fail(display = "unrecognized piece: {}", piece)]
    UnrecognizedPiece { piece: char },
}

/// Represents a chess position.
///
/// A `Position` contains everything the packed binary format preserves: where
/// each piece stands, whose turn it is, which rook squares are still
/// castling-eligible, and the en-passant target square if the previous move
/// was a double pawn push.
///
/// Castling eligibility is tracked per rook square rather than as four
/// player/side flags. For standard chess the two views are equivalent and the
/// [`Castling`] flags can be derived with [`Position::castling`]; the
/// per-square set is what the binary format stores.
///
/// # Examples
///
/// ```
/// use fenpack::{Position, Player};
///
/// let pos = Position::start_pos();
/// assert_eq!(pos.turn(), Player::White);
/// assert_eq!(pos.count_all_pieces(), 32);
/// ```
///
/// [`Castling`]: castle_rights/struct.Castling.html
/// [`Position::castling`]: struct.Position.html#method.castling
#[derive(Clone)]
pub struct Position {
    turn: Player,                    // Current turn
    occ: BitBoard,                   // BitBoard of all pieces
    piece_locations: PieceLocations, // Mapping squares to pieces and players
    castle_rooks: BitBoard,          // Castling-eligible rook squares
    ep_sq: Option<SQ>,               // En-passant target square, if any
}

impl Position {
    /// Constructs a position with no pieces, white to move, no castling
    /// eligibility and no en-passant target.
    ///
    /// This is the state the decoder starts from: every field a marker code
    /// can set holds its documented default until the marker is observed.
    pub fn empty() -> Position {
        Position {
            turn: Player::White,
            occ: BitBoard(0),
            piece_locations: PieceLocations::blank(),
            castle_rooks: BitBoard(0),
            ep_sq: None,
        }
    }

    /// Constructs the standard chess starting position.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenpack::position::{Position, START_FEN};
    ///
    /// let pos = Position::start_pos();
    /// assert_eq!(pos.fen(), START_FEN);
    /// ```
    pub fn start_pos() -> Position {
        let mut pos = Position::empty();
        static SETUP: [(PieceType, u64, u64); PIECE_TYPE_CNT] = [
            (PieceType::P, START_W_PAWN, START_B_PAWN),
            (PieceType::N, START_W_KNIGHT, START_B_KNIGHT),
            (PieceType::B, START_W_BISHOP, START_B_BISHOP),
            (PieceType::R, START_W_ROOK, START_B_ROOK),
            (PieceType::Q, START_W_QUEEN, START_B_QUEEN),
            (PieceType::K, START_W_KING, START_B_KING),
        ];
        for &(piece, white_bits, black_bits) in SETUP.iter() {
            for sq in BitBoard(white_bits) {
                pos.place(sq, Player::White, piece);
            }
            for sq in BitBoard(black_bits) {
                pos.place(sq, Player::Black, piece);
            }
        }
        pos.castle_rooks = Castling::all_castling().rook_squares();
        pos
    }

    /// Places a piece of the given player at a square, replacing whatever was
    /// there before.
    ///
    /// # Panics
    ///
    /// Panics if the square is not a legal square.
    pub fn place(&mut self, square: SQ, player: Player, piece: PieceType) {
        assert!(square.is_okay());
        self.piece_locations.place(square, player, piece);
        self.occ |= square.to_bb();
    }

    /// Removes any piece at the given square.
    ///
    /// # Panics
    ///
    /// Panics if the square is not a legal square.
    pub fn remove(&mut self, square: SQ) {
        assert!(square.is_okay());
        self.piece_locations.remove(square);
        self.occ &= !square.to_bb();
    }

    /// Returns the `BitBoard` of all occupied squares.
    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.occ
    }

    /// Returns the number of pieces on the board.
    #[inline]
    pub fn count_all_pieces(&self) -> u8 {
        self.occ.count_bits()
    }

    /// Returns the `PieceType` at a square, if any.
    #[inline]
    pub fn piece_at_sq(&self, square: SQ) -> Option<PieceType> {
        self.piece_locations.piece_at(square)
    }

    /// Returns the `Player` occupying a square, if any.
    #[inline]
    pub fn player_at_sq(&self, square: SQ) -> Option<Player> {
        self.piece_locations.player_at(square)
    }

    /// Returns the `(Player, PieceType)` pair at a square, if any.
    #[inline]
    pub fn player_piece_at_sq(&self, square: SQ) -> Option<(Player, PieceType)> {
        self.piece_locations.player_piece_at(square)
    }

    /// Returns the player whose turn it is to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Sets the player whose turn it is to move.
    #[inline(always)]
    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Returns the en-passant target square, if the previous move was a double
    /// pawn push.
    #[inline(always)]
    pub fn ep_square(&self) -> Option<SQ> {
        self.ep_sq
    }

    /// Sets the en-passant target square.
    #[inline(always)]
    pub fn set_ep_square(&mut self, square: SQ) {
        self.ep_sq = Some(square);
    }

    /// Returns the `BitBoard` of castling-eligible rook squares.
    #[inline(always)]
    pub fn castle_rook_squares(&self) -> BitBoard {
        self.castle_rooks
    }

    /// Returns whether the rook on the given square is castling-eligible.
    #[inline]
    pub fn is_castle_rook(&self, square: SQ) -> bool {
        (self.castle_rooks & square.to_bb()).is_not_empty()
    }

    /// Marks the rook on the given square as castling-eligible.
    #[inline]
    pub fn set_castle_rook(&mut self, square: SQ) {
        self.castle_rooks |= square.to_bb();
    }

    /// Returns the castling rights of the position as [`Castling`] flags,
    /// condensed from the per-square eligibility set.
    ///
    /// [`Castling`]: castle_rights/struct.Castling.html
    #[inline]
    pub fn castling(&self) -> Castling {
        Castling::from_rook_squares(self.castle_rooks)
    }

    /// Constructs a `Position` from a FEN string.
    ///
    /// Only the first four FEN fields (placement, turn, castling, en-passant)
    /// carry information a `Position` tracks; the half-move and full-move
    /// counters are accepted and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenpack::Position;
    ///
    /// let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    /// assert_eq!(pos.count_all_pieces(), 32);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Position, FenBuildError> {
        // split the string by white space
        let det_split: Vec<&str> = fen.split_whitespace().collect();

        // [ piece placement, side to move, castling ability, en passant square ]
        // with optional trailing move counters
        if det_split.len() < 4 {
            return Err(FenBuildError::NotEnoughSections {
                sections: det_split.len(),
            });
        }

        // Split the first part by '/' for locations
        let b_rep: Vec<&str> = det_split[0].split('/').collect();

        if b_rep.len() != 8 {
            return Err(FenBuildError::IncorrectRankAmounts { ranks: b_rep.len() });
        }

        let mut pos = Position::empty();

        for (i, rank_str) in b_rep.iter().enumerate() {
            let min_sq = (7 - i) * 8;
            let max_sq = min_sq + 7;
            let mut idx = min_sq;
            for ch in rank_str.chars() {
                if idx > max_sq + 1 {
                    return Err(FenBuildError::SquareLargerRank { rank: 8 - i });
                }
                if let Some(dig) = ch.to_digit(10) {
                    idx += dig as usize;
                } else {
                    // if no digit, then there is a piece here
                    let piece = match ch {
                        'p' | 'P' => PieceType::P,
                        'n' | 'N' => PieceType::N,
                        'b' | 'B' => PieceType::B,
                        'r' | 'R' => PieceType::R,
                        'q' | 'Q' => PieceType::Q,
                        'k' | 'K' => PieceType::K,
                        _ => return Err(FenBuildError::UnrecognizedPiece { piece: ch }),
                    };
                    let player = if ch.is_lowercase() {
                        Player::Black
                    } else {
                        Player::White
                    };
                    if idx > max_sq {
                        return Err(FenBuildError::SquareLargerRank { rank: 8 - i });
                    }
                    pos.place(SQ(idx as u8), player, piece);
                    idx += 1;
                }
            }
            if idx > max_sq + 1 {
                return Err(FenBuildError::SquareLargerRank { rank: 8 - i });
            }
        }

        // Side to move
        let turn_char: char = det_split[1]
            .chars()
            .next()
            .ok_or(FenBuildError::UnrecognizedTurn {
                turn: det_split[1].to_string(),
            })?;
        pos.turn = match turn_char {
            'b' => Player::Black,
            'w' => Player::White,
            _ => {
                return Err(FenBuildError::UnrecognizedTurn {
                    turn: det_split[1].to_string(),
                });
            }
        };

        // Castling rights
        let mut castling = Castling::empty_set();
        for ch in det_split[2].chars() {
            if !castling.add_castling_char(ch) {
                return Err(FenBuildError::UnrecognizedCastling { castling: ch });
            }
        }
        pos.castle_rooks = castling.rook_squares();

        // En-passant square
        if det_split[3] != "-" {
            let mut chars = det_split[3].chars();
            let file = match chars.next() {
                Some(c @ 'a'..='h') => c as u8 - b'a',
                _ => {
                    return Err(FenBuildError::EPSquareUnreadable {
                        ep: det_split[3].to_string(),
                    });
                }
            };
            // an en-passant target can only sit on rank 3 or rank 6
            let rank = match chars.next() {
                Some('3') => 2,
                Some('6') => 5,
                Some(_) => {
                    return Err(FenBuildError::EPSquareInvalid {
                        ep: det_split[3].to_string(),
                    });
                }
                None => {
                    return Err(FenBuildError::EPSquareUnreadable {
                        ep: det_split[3].to_string(),
                    });
                }
            };
            if chars.next().is_some() {
                return Err(FenBuildError::EPSquareUnreadable {
                    ep: det_split[3].to_string(),
                });
            }
            pos.ep_sq = Some(SQ(rank * 8 + file));
        }

        Ok(pos)
    }

    /// Creates a FEN string of the position.
    ///
    /// A `Position` holds no move counters, so the half-move and full-move
    /// fields are always printed as `0 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fenpack::Position;
    ///
    /// let pos = Position::start_pos();
    /// assert_eq!(pos.fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    /// ```
    pub fn fen(&self) -> String {
        let mut s = String::default();
        let mut blanks = 0;
        for idx in 0..SQ_CNT as u8 {
            // Cause of weird fen ordering, gotta do it this way
            let sq = SQ((idx % 8) + (8 * (7 - (idx / 8))));
            if sq.file_idx_of_sq() == 0 && sq.rank_idx_of_sq() != 7 {
                if blanks != 0 {
                    // Only add a number if there is a space between pieces
                    s.push(char::from_digit(blanks, 10).unwrap());
                    blanks = 0;
                }
                s.push('/');
            }
            match self.player_piece_at_sq(sq) {
                None => blanks += 1,
                Some((player, piece)) => {
                    if blanks != 0 {
                        s.push(char::from_digit(blanks, 10).unwrap());
                        blanks = 0;
                    }
                    s.push(PIECE_DISPLAYS[player as usize][piece as usize]);
                }
            }
        }

        if blanks != 0 {
            s.push(char::from_digit(blanks, 10).unwrap());
        }

        s.push(' ');
        // current turn
        s.push(match self.turn {
            Player::White => 'w',
            Player::Black => 'b',
        });
        s.push(' ');

        // Castling state
        s.push_str(&self.castling().pretty_string());
        s.push(' ');

        // EP square
        match self.ep_sq {
            None => s.push('-'),
            Some(ep) => {
                s.push(FILE_DISPLAYS[ep.file_idx_of_sq() as usize]);
                s.push(RANK_DISPLAYS[ep.rank_idx_of_sq() as usize]);
            }
        }
        s.push_str(" 0 1");

        s
    }

    /// Returns a prettified String of the position, for easy command line displaying.
    ///
    /// Capital letters represent white pieces, while lower case represents black pieces.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 8);
        for sq in 0..SQ_CNT as u8 {
            // flip rank ordering so rank 8 prints first
            let idx = (sq % 8) + (8 * (7 - (sq / 8)));
            match self.player_piece_at_sq(SQ(idx)) {
                None => s.push('-'),
                Some((player, piece)) => {
                    s.push(PIECE_DISPLAYS[player as usize][piece as usize]);
                }
            }
            if sq % 8 == 7 {
                s.push('\n');
            } else {
                s.push(' ');
            }
        }
        s
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::start_pos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Position: {}", self.fen())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.turn == other.turn
            && self.occ == other.occ
            && self.piece_locations == other.piece_locations
            && self.castle_rooks == other.castle_rooks
            && self.ep_sq == other.ep_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pos_state() {
        let pos = Position::start_pos();
        assert_eq!(pos.turn(), Player::White);
        assert_eq!(pos.count_all_pieces(), 32);
        assert_eq!(pos.occupied(), BitBoard(START_OCC_ALL));
        assert_eq!(pos.castle_rook_squares().count_bits(), 4);
        assert!(pos.is_castle_rook(SQ::A1));
        assert!(pos.is_castle_rook(SQ::H1));
        assert!(pos.is_castle_rook(SQ::A8));
        assert!(pos.is_castle_rook(SQ::H8));
        assert_eq!(pos.ep_square(), None);
        assert_eq!(
            pos.player_piece_at_sq(SQ::E1),
            Some((Player::White, PieceType::K))
        );
        assert_eq!(
            pos.player_piece_at_sq(SQ::E8),
            Some((Player::Black, PieceType::K))
        );
    }

    #[test]
    fn place_and_remove() {
        let mut pos = Position::empty();
        assert_eq!(pos.count_all_pieces(), 0);
        pos.place(SQ::D4, Player::Black, PieceType::Q);
        assert_eq!(pos.count_all_pieces(), 1);
        assert_eq!(pos.piece_at_sq(SQ::D4), Some(PieceType::Q));
        assert_eq!(pos.player_at_sq(SQ::D4), Some(Player::Black));
        pos.remove(SQ::D4);
        assert_eq!(pos.count_all_pieces(), 0);
        assert!(pos.piece_at_sq(SQ::D4).is_none());
        assert!(pos.occupied().is_empty());
    }

    #[test]
    fn fen_round_trip() {
        let fens = [
            START_FEN,
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            "rnbqkbnr/ppp1pppp/8/3p4/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
            "8/8/8/8/4pP2/8/8/4k2K b - f3 0 1",
        ];
        for fen in fens.iter() {
            let pos = Position::from_fen(fen).unwrap();
            assert_eq!(&pos.fen(), fen);
        }
    }

    #[test]
    fn fen_ep_parsing() {
        let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert_eq!(pos.ep_square(), Some(SQ::E3));
        let pos = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 2")
            .unwrap();
        assert_eq!(pos.ep_square(), Some(SQ::E6));
    }

    #[test]
    fn fen_errors() {
        assert!(Position::from_fen("").is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8 w - -").is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8/8 x - -").is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8/8 w Z -").is_err());
        assert!(Position::from_fen("8/8/8/8/8/8/8/8 w - e4").is_err());
        assert!(Position::from_fen("9/8/8/8/8/8/8/8 w - -").is_err());
        assert!(Position::from_fen("t7/8/8/8/8/8/8/8 w - -").is_err());
    }
}

//! Compact share-token codec
//!
//! A layout serializes to `[version, width, height]` followed by one byte
//! per room and segment cell in row-major order, base64-encoded with the
//! URL-safe alphabet and no padding. The result is safe in a URL fragment
//! without escaping.
//!
//! Corner cells are never encoded: they are a pure function of their
//! neighboring segments, so decode re-derives them. That keeps tokens short
//! and self-heals a token whose corners would otherwise be inconsistent.
//!
//! Room cell codes pack kind and orientation: `0` is empty, otherwise
//! `1 + kind_index * 4 + rotation_index`. Segment codes are the wall
//! variant codes. Encoding is deterministic, so equal layouts produce equal
//! tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::catalog::{CornerShape, ItemKind, PlacedItem, Rotation, WallKind};
use crate::error::DecodeError;
use crate::layout::{Cell, Dimensions, Layout, Position, MAX_DIM, MIN_DIM};

/// Current token format version. Unknown versions are a decode error, not
/// a best-effort parse.
const VERSION: u8 = 1;

/// Bytes before the cell codes: version, width, height.
const HEADER_LEN: usize = 3;

/// Number of encoded cells for a plan size (rooms plus segments; corners
/// are derived and skipped).
fn encoded_cells(dims: Dimensions) -> usize {
    let (w, h) = (dims.width, dims.height);
    w * h + h * (w - 1) + w * (h - 1)
}

fn room_code(item: Option<PlacedItem>) -> u8 {
    match item {
        None => 0,
        Some(item) => 1 + item.kind.index() * 4 + item.rotation.index(),
    }
}

fn room_from_code(code: u8, index: usize) -> Result<Option<PlacedItem>, DecodeError> {
    if code == 0 {
        return Ok(None);
    }
    let kind = ItemKind::from_index((code - 1) / 4)
        .ok_or(DecodeError::UnknownCellCode { code, index })?;
    let rotation = Rotation::from_index((code - 1) % 4).expect("mod 4 is always in range");
    Ok(Some(PlacedItem::with_rotation(kind, rotation)))
}

/// Encode a layout into a URL-fragment-safe token.
pub fn encode(layout: &Layout) -> String {
    let dims = layout.dimensions();
    let mut bytes = Vec::with_capacity(HEADER_LEN + encoded_cells(dims));
    bytes.push(VERSION);
    bytes.push(dims.width as u8);
    bytes.push(dims.height as u8);
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            match layout.cell(Position::new(row, col)) {
                Cell::Room(item) => bytes.push(room_code(item)),
                Cell::Segment(kind) => bytes.push(kind.code()),
                Cell::Corner(_) => {}
            }
        }
    }
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a token back into a layout.
///
/// Validation is strict: the version must be known, the dimensions in
/// range, the payload length exact, and every cell code a catalog entry.
/// A failed decode never applies partially.
pub fn decode(token: &str) -> Result<Layout, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::TruncatedHeader);
    }
    if bytes[0] != VERSION {
        return Err(DecodeError::UnknownVersion(bytes[0]));
    }
    let (width, height) = (usize::from(bytes[1]), usize::from(bytes[2]));
    if !(MIN_DIM..=MAX_DIM).contains(&width) || !(MIN_DIM..=MAX_DIM).contains(&height) {
        return Err(DecodeError::DimensionsOutOfRange {
            width,
            height,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    let dims = Dimensions::new(width, height);
    let expected = encoded_cells(dims);
    let cells = &bytes[HEADER_LEN..];
    if cells.len() != expected {
        return Err(DecodeError::LengthMismatch {
            width,
            height,
            expected,
            actual: cells.len(),
        });
    }

    let mut grid = Vec::with_capacity(dims.rows() * dims.cols());
    let mut next = cells.iter().copied().enumerate();
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            let pos = Position::new(row, col);
            if pos.is_corner() {
                // Placeholder; re-derived below.
                grid.push(Cell::Corner(CornerShape::None));
                continue;
            }
            let (index, code) = next.next().expect("length checked above");
            if pos.is_room() {
                grid.push(Cell::Room(room_from_code(code, index)?));
            } else {
                let kind = WallKind::from_code(code)
                    .ok_or(DecodeError::UnknownCellCode { code, index })?;
                grid.push(Cell::Segment(kind));
            }
        }
    }
    Ok(Layout::from_cells(dims, grid).fix_corner_walls())
}

/// Decode a URL fragment, tolerating the leading `#`.
pub fn decode_fragment(fragment: &str) -> Result<Layout, DecodeError> {
    decode(fragment.strip_prefix('#').unwrap_or(fragment))
}

/// Decode a URL fragment, falling back to an empty plan of `dims` when the
/// fragment is absent or malformed. This is the load-time entry point: a
/// corrupt shared link must not fail the page.
pub fn decode_fragment_or_default(fragment: &str, dims: Dimensions) -> Layout {
    decode_fragment(fragment).unwrap_or_else(|_| Layout::empty(dims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_fragment_safe() {
        let layout = Layout::empty(Dimensions::new(4, 3))
            .set_item(Position::new(0, 0), Some(PlacedItem::new(ItemKind::Fridge)));
        let token = encode(&layout);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let layout = Layout::empty(Dimensions::new(5, 4))
            .set_item(Position::new(2, 2), Some(PlacedItem::new(ItemKind::Oven)))
            .set_wall(Position::new(0, 1), WallKind::Counter);
        assert_eq!(encode(&layout), encode(&layout.clone()));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(decode(""), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_bad_alphabet_rejected() {
        assert!(matches!(decode("a!b%c"), Err(DecodeError::Alphabet(_))));
    }

    #[test]
    fn test_truncated_header_rejected() {
        let token = URL_SAFE_NO_PAD.encode([VERSION, 3]);
        assert!(matches!(decode(&token), Err(DecodeError::TruncatedHeader)));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut bytes = vec![9, 2, 2];
        bytes.extend(std::iter::repeat(0).take(encoded_cells(Dimensions::new(2, 2))));
        let token = URL_SAFE_NO_PAD.encode(bytes);
        assert!(matches!(decode(&token), Err(DecodeError::UnknownVersion(9))));
    }

    #[test]
    fn test_dimensions_out_of_range_rejected() {
        let token = URL_SAFE_NO_PAD.encode([VERSION, 1, 5]);
        assert!(matches!(
            decode(&token),
            Err(DecodeError::DimensionsOutOfRange { width: 1, .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let token = URL_SAFE_NO_PAD.encode([VERSION, 2, 2, 0, 0]);
        assert!(matches!(
            decode(&token),
            Err(DecodeError::LengthMismatch { expected: 8, actual: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_room_code_rejected() {
        let mut bytes = vec![VERSION, 2, 2];
        bytes.extend(std::iter::repeat(0).take(encoded_cells(Dimensions::new(2, 2))));
        bytes[HEADER_LEN] = 255; // first cell is a room
        let token = URL_SAFE_NO_PAD.encode(bytes);
        assert!(matches!(
            decode(&token),
            Err(DecodeError::UnknownCellCode { code: 255, index: 0 })
        ));
    }

    #[test]
    fn test_unknown_segment_code_rejected() {
        let mut bytes = vec![VERSION, 2, 2];
        bytes.extend(std::iter::repeat(0).take(encoded_cells(Dimensions::new(2, 2))));
        bytes[HEADER_LEN + 1] = 7; // second cell is the segment at (0, 1)
        let token = URL_SAFE_NO_PAD.encode(bytes);
        assert!(matches!(
            decode(&token),
            Err(DecodeError::UnknownCellCode { code: 7, index: 1 })
        ));
    }

    #[test]
    fn test_room_code_packs_kind_and_rotation() {
        let item = PlacedItem::with_rotation(ItemKind::Sink, Rotation::R270);
        let code = room_code(Some(item));
        assert_eq!(room_from_code(code, 0).unwrap(), Some(item));
        assert_eq!(room_from_code(0, 0).unwrap(), None);
    }

    #[test]
    fn test_fragment_hash_stripped() {
        let layout = Layout::empty(Dimensions::new(3, 3));
        let token = encode(&layout);
        assert_eq!(decode_fragment(&format!("#{token}")).unwrap(), layout);
        assert_eq!(decode_fragment(&token).unwrap(), layout);
    }

    #[test]
    fn test_fragment_fallback_on_garbage() {
        let dims = Dimensions::new(4, 4);
        assert_eq!(
            decode_fragment_or_default("#not a token", dims),
            Layout::empty(dims)
        );
        assert_eq!(decode_fragment_or_default("", dims), Layout::empty(dims));
    }
}

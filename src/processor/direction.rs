//! MZ direction codes follow the numeric keypad: 2 down, 4 left, 6 right, 8 up.

use crate::model::Facing;

/// Map an MZ direction code to a facing. Unknown or missing codes face down.
pub fn facing_from_code(code: Option<i64>) -> Facing {
    match code {
        Some(2) => Facing::Down,
        Some(4) => Facing::Left,
        Some(6) => Facing::Right,
        Some(8) => Facing::Up,
        _ => Facing::Down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_codes_map_to_facings() {
        assert_eq!(facing_from_code(Some(2)), Facing::Down);
        assert_eq!(facing_from_code(Some(4)), Facing::Left);
        assert_eq!(facing_from_code(Some(6)), Facing::Right);
        assert_eq!(facing_from_code(Some(8)), Facing::Up);
    }

    #[test]
    fn anything_else_faces_down() {
        for code in [0, 1, 3, 5, 7, 9, -2, -8, 9999, i64::MIN, i64::MAX] {
            assert_eq!(facing_from_code(Some(code)), Facing::Down, "code {code}");
        }
        assert_eq!(facing_from_code(None), Facing::Down);
    }
}

//! Frame file naming.

/// Builds a frame file name: `prefix`, then `id` zero-padded to five digits,
/// then `extension` verbatim.
///
/// Ids wider than five digits are written in full. The extension is appended
/// as given, so include the dot if one is wanted.
///
/// ```
/// use framemetrics::naming::format_frame_name;
///
/// assert_eq!(format_frame_name("frame_", 42, ".png"), "frame_00042.png");
/// assert_eq!(format_frame_name("frame_", 123456, ".png"), "frame_123456.png");
/// ```
pub fn format_frame_name(prefix: &str, id: u32, extension: &str) -> String {
    format!("{prefix}{id:05}{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_every_width_to_five_digits() {
        assert_eq!(format_frame_name("f", 0, ""), "f00000");
        assert_eq!(format_frame_name("f", 7, ""), "f00007");
        assert_eq!(format_frame_name("f", 99, ""), "f00099");
        assert_eq!(format_frame_name("f", 100, ""), "f00100");
        assert_eq!(format_frame_name("f", 9999, ""), "f09999");
        assert_eq!(format_frame_name("f", 10000, ""), "f10000");
    }

    #[test]
    fn names_sort_in_id_order() {
        let mut names: Vec<_> = [10u32, 2, 1000, 300]
            .iter()
            .map(|&id| format_frame_name("frame_", id, ".png"))
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "frame_00002.png",
                "frame_00010.png",
                "frame_00300.png",
                "frame_01000.png"
            ]
        );
    }
}

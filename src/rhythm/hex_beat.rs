/// Generates a rhythm from a hexadecimal string: each hex digit expands into its 4 bit binary
/// representation, most significant bit first. So `"8"` is a single beat followed by 3 rests and
/// `"f"` are 4 beats.
///
/// Characters which are no hex digits expand into 4 rests.
pub fn hex_beat(hex: &str) -> Vec<u8> {
    hex.chars()
        .flat_map(|c| {
            let nibble = c.to_digit(16).unwrap_or_else(|| {
                log::warn!("Invalid hex beat digit '{}': using rests instead", c);
                0
            });
            (0..4).rev().map(move |bit| ((nibble >> bit) & 1) as u8)
        })
        .collect()
}

// --------------------------------------------------------------------------------------------------

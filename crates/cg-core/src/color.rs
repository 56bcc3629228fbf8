/// Grayscale ITU-R 601-2, virgule fixe 16 bits.
///
/// Bit-exact with the common imaging-library `L` conversion:
/// `(R*19595 + G*38470 + B*7471 + 0x8000) >> 16`.
///
/// # Example
/// ```
/// use cg_core::color::grayscale;
/// assert_eq!(grayscale(255, 255, 255), 255);
/// assert_eq!(grayscale(255, 0, 0), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn grayscale(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Parse `"R,G,B"` into an RGB triple. Whitespace around components is ignored.
///
/// # Errors
/// Returns a message if there are not exactly three components or one of them
/// is not an integer in `[0, 255]`.
///
/// # Example
/// ```
/// use cg_core::color::parse_rgb;
/// assert_eq!(parse_rgb("12, 34,56"), Ok((12, 34, 56)));
/// assert!(parse_rgb("0,0").is_err());
/// ```
pub fn parse_rgb(s: &str) -> Result<(u8, u8, u8), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[r, g, b] = parts.as_slice() else {
        return Err(format!("couleur '{s}' : trois composantes R,G,B attendues"));
    };
    let channel = |c: &str| {
        c.parse::<u8>()
            .map_err(|_| format!("couleur '{s}' : composante '{c}' hors de [0, 255]"))
    };
    Ok((channel(r)?, channel(g)?, channel(b)?))
}

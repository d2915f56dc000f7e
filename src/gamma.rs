// sRGB <-> linear lookup tables for compositing the overlay over the camera.
// Visual: the translucent mask darkens the picture evenly instead of crushing
// midtones, and the scan line's soft ends fade without dark fringes.

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), quantized to 4096 steps
    to_srgb: [u8; 4096],
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut to_linear = [0.0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut to_srgb = [0u8; 4096];
        for (i, slot) in to_srgb.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { to_linear, to_srgb }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.to_srgb[idx]
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        let lut = GammaLut::new();
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(0)), 0);
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(255)), 255);
    }

    #[test]
    fn midtones_survive_a_round_trip() {
        let lut = GammaLut::new();
        for v in [32u8, 128, 200] {
            let back = lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(v));
            assert!((back as i32 - v as i32).abs() <= 1, "{v} -> {back}");
        }
    }
}

use crate::error::{AssetError, AssetResult};

/// Straight-alpha RGBA, one byte per channel.
pub type Rgba = [u8; 4];

/// Opaque RGB triple, used for gradient tones and flattened output.
pub type Rgb = [u8; 3];

/// An owned straight-alpha RGBA8 pixel buffer.
///
/// The base canvas of a pipeline is opaque; shapes are drawn onto same-size
/// transparent layers (see [`Canvas::layer`]) and folded back in with
/// [`Canvas::alpha_composite`], strictly back-to-front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> AssetResult<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    pub fn filled(width: u32, height: u32, rgba: Rgba) -> AssetResult<Self> {
        if width == 0 || height == 0 {
            return Err(AssetError::validation("canvas width/height must be > 0"));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| AssetError::validation("canvas buffer size overflow"))?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A fully transparent canvas with the same dimensions as `self`.
    pub fn layer(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![0u8; self.data.len()],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Stores `rgba` at (x, y) verbatim, no blending. Out-of-bounds writes
    /// are dropped.
    pub fn put(&mut self, x: i64, y: i64, rgba: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = self.index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Blends `layer` over `self` pixel by pixel. Both canvases must have
    /// identical dimensions.
    pub fn alpha_composite(&mut self, layer: &Canvas) -> AssetResult<()> {
        if self.width != layer.width || self.height != layer.height {
            return Err(AssetError::draw(
                "alpha_composite expects identically sized canvases",
            ));
        }
        for (d, s) in self
            .data
            .chunks_exact_mut(4)
            .zip(layer.data.chunks_exact(4))
        {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
        Ok(())
    }

    /// Drops the alpha channel. Callers flatten only after compositing onto
    /// an opaque base, so the discarded alpha is 255 everywhere.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

/// Straight-alpha source-over: `out_a = sa + da*(1-sa)`, color channels
/// weighted by their alphas and renormalized.
pub fn over(dst: Rgba, src: Rgba) -> Rgba {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u32::from(dst[3]);
    let inv = 255 - sa;
    let da_scaled = mul_div255(da, inv);
    let out_a = sa + da_scaled;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = u32::from(src[i]) * sa;
        let dc = u32::from(dst[i]) * da_scaled;
        out[i] = ((sc + dc + out_a / 2) / out_a) as u8;
    }
    out[3] = out_a as u8;
    out
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_transparent_src_is_noop() {
        let dst = [10, 20, 30, 255];
        assert_eq!(over(dst, [200, 200, 200, 0]), dst);
    }

    #[test]
    fn over_opaque_src_replaces_dst() {
        let src = [255, 0, 0, 255];
        assert_eq!(over([0, 0, 0, 255], src), src);
    }

    #[test]
    fn over_src_onto_transparent_dst_keeps_src() {
        let src = [100, 110, 120, 200];
        assert_eq!(over([0, 0, 0, 0], src), src);
    }

    #[test]
    fn over_half_alpha_onto_opaque_mixes_channels() {
        let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
        assert_eq!(out[3], 255);
        for c in &out[..3] {
            assert!((126..=130).contains(c), "channel {c} not near half");
        }
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(Canvas::new(0, 4).is_err());
        assert!(Canvas::new(4, 0).is_err());
    }

    #[test]
    fn composite_rejects_size_mismatch() {
        let mut base = Canvas::new(4, 4).unwrap();
        let other = Canvas::new(4, 5).unwrap();
        assert!(base.alpha_composite(&other).is_err());
    }

    #[test]
    fn layer_matches_base_dimensions_and_is_transparent() {
        let base = Canvas::filled(3, 2, [9, 9, 9, 255]).unwrap();
        let layer = base.layer();
        assert_eq!((layer.width(), layer.height()), (3, 2));
        assert!(layer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn put_out_of_bounds_is_dropped() {
        let mut c = Canvas::new(2, 2).unwrap();
        let before = c.clone();
        c.put(-1, 0, [1, 2, 3, 4]);
        c.put(0, 2, [1, 2, 3, 4]);
        c.put(2, 0, [1, 2, 3, 4]);
        assert_eq!(c, before);
    }

    #[test]
    fn to_rgb8_drops_alpha() {
        let c = Canvas::filled(2, 1, [1, 2, 3, 255]).unwrap();
        assert_eq!(c.to_rgb8(), vec![1, 2, 3, 1, 2, 3]);
    }
}

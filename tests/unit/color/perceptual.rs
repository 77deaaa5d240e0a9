//! Tests for the perceptually uniform colormap anchors

#[cfg(test)]
mod tests {
    use voronoi_raster::color::perceptual::SCHEMES;
    use voronoi_raster::color::scheme::{SchemeKind, find, unpack};

    // Tests viridis keeps the published first and last table entries
    // Verified by rounding anchors to the nearest multiple of 16
    #[test]
    fn test_viridis_endpoints() {
        let viridis = find("viridis").map(|scheme| scheme.anchors);
        assert_eq!(viridis.and_then(|a| a.first()), Some(&0x440154));
        assert_eq!(viridis.and_then(|a| a.last()), Some(&0xfde725));
    }

    // Tests every perceptual map has 10 anchors and gets lighter throughout
    // Verified by reversing one anchor list
    #[test]
    fn test_perceptual_maps_lighten_monotonically() {
        assert_eq!(SCHEMES.len(), 4);
        for scheme in SCHEMES {
            assert_eq!(scheme.kind, SchemeKind::Perceptual);
            assert_eq!(scheme.anchors.len(), 10, "{}", scheme.name);

            let luma = |packed: u32| {
                let [r, g, b] = unpack(packed);
                0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
            };
            assert!(
                scheme
                    .anchors
                    .windows(2)
                    .all(|pair| luma(pair[0]) < luma(pair[1])),
                "{} does not lighten monotonically",
                scheme.name
            );
        }
    }
}

//! Tests for gradient sampling, palette validation and channel conversion

#[cfg(test)]
mod tests {
    use voronoi_raster::DiagramError;
    use voronoi_raster::color::palette::{sample_gradient, scale_channel, to_rgb};
    use voronoi_raster::color::scheme::{self, SchemeKind, unpack};
    use voronoi_raster::color::{Palette, PaletteResolver, SchemeResolver};
    use voronoi_raster::io::configuration::PALETTE_SIZE;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    // Tests linear interpolation between two anchors
    // Verified by sampling at j / count instead of j / (count - 1)
    #[test]
    fn test_sample_gradient_two_anchors() {
        let samples = sample_gradient(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], 3);
        assert_eq!(samples.len(), 3);
        assert_close(samples[0], [0.0, 0.0, 0.0]);
        assert_close(samples[1], [0.5, 0.5, 0.5]);
        assert_close(samples[2], [1.0, 1.0, 1.0]);
    }

    // Tests interpolation crosses segment boundaries
    // Verified by always using the first segment
    #[test]
    fn test_sample_gradient_multiple_segments() {
        let anchors = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
        let samples = sample_gradient(&anchors, 5);
        assert_close(samples[1], [0.5, 0.0, 0.0]);
        assert_close(samples[2], [1.0, 0.0, 0.0]);
        assert_close(samples[3], [1.0, 0.5, 0.0]);
        assert_close(samples[4], [1.0, 1.0, 0.0]);
    }

    // Tests degenerate inputs
    // Verified by dividing by count - 1 for a single sample
    #[test]
    fn test_sample_gradient_degenerate() {
        assert!(sample_gradient(&[], 5).is_empty());
        assert!(sample_gradient(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], 0).is_empty());
        assert_eq!(
            sample_gradient(&[[0.2, 0.4, 0.6], [1.0, 1.0, 1.0]], 1),
            vec![[0.2, 0.4, 0.6]]
        );
        assert_eq!(sample_gradient(&[[0.3, 0.3, 0.3]], 2).len(), 2);
    }

    // Tests resolver endpoints match the scheme anchors
    // Verified by dropping the last anchor
    #[test]
    fn test_scheme_resolver_endpoints() {
        let colors = SchemeResolver.resolve("PuBuGn", PALETTE_SIZE);
        assert!(colors.is_ok());
        let colors = colors.unwrap_or_default();

        assert_eq!(colors.len(), PALETTE_SIZE);
        assert_close(colors[0], unpack(0xfff7fb));
        assert_close(colors[PALETTE_SIZE - 1], unpack(0x014636));
    }

    // Tests the reversed suffix flips the gradient
    // Verified by ignoring the suffix
    #[test]
    fn test_scheme_resolver_reversed() {
        let forward = SchemeResolver
            .resolve("YlOrRd", PALETTE_SIZE)
            .unwrap_or_default();
        let reversed = SchemeResolver
            .resolve("YlOrRd_r", PALETTE_SIZE)
            .unwrap_or_default();

        assert_eq!(reversed.len(), PALETTE_SIZE);
        assert_close(reversed[0], forward[PALETTE_SIZE - 1]);
        assert_close(reversed[PALETTE_SIZE - 1], forward[0]);
    }

    // Tests interior entries against matplotlib's 256-entry lookup tables
    // Verified by sampling at j / count instead of j / (count - 1)
    #[test]
    fn test_scheme_resolver_interior_entries() {
        let cases: [(&str, usize, [f64; 3], [u8; 3]); 6] = [
            (
                "PuBuGn",
                1,
                [0.997_662_437_524_029_2, 0.966_043_829_296_424_4, 0.982_960_399_846_213],
                [255, 247, 251],
            ),
            (
                "PuBuGn",
                128,
                [0.400_907_343_329_488_7, 0.661_207_227_989_234_9, 0.810_841_983_852_364_5],
                [102, 169, 207],
            ),
            (
                "PuBuGn",
                254,
                [0.003_921_568_627_450_98, 0.279_184_928_873_510_2, 0.216_070_742_022_299_1],
                [1, 71, 55],
            ),
            (
                "YlOrRd",
                1,
                [1.0, 0.997_785_467_128_027_7, 0.794_586_697_424_067_7],
                [255, 255, 203],
            ),
            (
                "YlOrRd",
                128,
                [0.992_095_347_943_098_8, 0.549_065_743_944_636_7, 0.234_186_851_211_072_66],
                [253, 140, 59],
            ),
            (
                "YlOrRd",
                254,
                [0.509_465_590_157_631_7, 0.0, 0.149_019_607_843_137_25],
                [130, 0, 38],
            ),
        ];

        for (name, entry, unit, bytes) in cases {
            let colors = SchemeResolver
                .resolve(name, PALETTE_SIZE)
                .unwrap_or_default();
            assert_eq!(colors.len(), PALETTE_SIZE, "{name}");
            assert_close(colors[entry], unit);
            assert_eq!(to_rgb(colors[entry]), bytes, "{name}[{entry}]");
        }
    }

    // Tests diverging schemes place anchors at every 25.5 entries
    // Verified by spacing anchors as if every scheme had 9 classes
    #[test]
    fn test_scheme_resolver_diverging_interior() {
        let diverging = scheme::all().filter(|s| s.kind == SchemeKind::Diverging);
        let mut seen = 0;
        for gradient in diverging {
            let colors = SchemeResolver
                .resolve(gradient.name, PALETTE_SIZE)
                .unwrap_or_default();
            assert_eq!(colors.len(), PALETTE_SIZE, "{}", gradient.name);
            assert_close(colors[51], unpack(gradient.anchors[2]));
            assert_close(colors[204], unpack(gradient.anchors[8]));
            seen += 1;
        }
        assert_eq!(seen, 9);

        let rdbu = SchemeResolver
            .resolve("RdBu", PALETTE_SIZE)
            .unwrap_or_default();
        assert_eq!(rdbu.get(51).copied().map(to_rgb), Some([214, 96, 77]));
    }

    // Tests perceptual maps place anchors at every 85 / 3 entries
    // Verified by treating the anchors as 9 evenly spaced classes
    #[test]
    fn test_scheme_resolver_perceptual_interior() {
        for name in ["viridis", "magma", "inferno", "plasma"] {
            let Some(gradient) = scheme::find(name) else {
                unreachable!("{name} must be built in");
            };
            assert_eq!(gradient.kind, SchemeKind::Perceptual);
            let colors = SchemeResolver
                .resolve(name, PALETTE_SIZE)
                .unwrap_or_default();
            assert_eq!(colors.len(), PALETTE_SIZE, "{name}");
            assert_close(colors[85], unpack(gradient.anchors[3]));
            assert_close(colors[170], unpack(gradient.anchors[6]));
        }

        let viridis = SchemeResolver
            .resolve("viridis_r", PALETTE_SIZE)
            .unwrap_or_default();
        assert_eq!(viridis.get(85).copied().map(to_rgb), Some([53, 183, 121]));
    }

    // Tests unknown names are configuration errors naming the input
    // Verified by falling back to a default scheme
    #[test]
    fn test_scheme_resolver_unknown_name() {
        let result = SchemeResolver.resolve("NotAMap", PALETTE_SIZE);
        let Err(error) = result else {
            unreachable!("unknown color map must fail");
        };
        assert!(error.is_configuration_error());
        assert!(error.to_string().contains("NotAMap"));
        assert!(error.to_string().contains("PuBuGn"));
    }

    // Tests resolving the same name twice yields identical palettes
    // Verified by adding random jitter to samples
    #[test]
    fn test_resolution_is_idempotent() {
        let first = Palette::resolve(&SchemeResolver, "color_map1", "Blues");
        let second = Palette::resolve(&SchemeResolver, "color_map1", "Blues");
        assert!(first.is_ok());
        assert_eq!(first.ok(), second.ok());
    }

    // Tests palette resolution reports the configuration field
    // Verified by keeping the resolver's parameter name
    #[test]
    fn test_palette_resolve_reports_parameter() {
        match Palette::resolve(&SchemeResolver, "color_map2", "Nope") {
            Err(DiagramError::InvalidParameter {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "color_map2");
                assert_eq!(value, "Nope");
            }
            other => unreachable!("expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests palettes must have exactly 256 entries
    // Verified by accepting any non-empty palette
    #[test]
    fn test_palette_size_enforced() {
        let short = Palette::new("color_map1", "short", vec![[0.5, 0.5, 0.5]; 255]);
        let Err(error) = short else {
            unreachable!("short palette must fail");
        };
        assert!(error.to_string().contains("255 entries"));

        let long = Palette::new("color_map1", "long", vec![[0.5, 0.5, 0.5]; 257]);
        assert!(long.is_err());

        let exact = Palette::new("color_map1", "exact", vec![[0.5, 0.5, 0.5]; 256]);
        assert!(exact.is_ok());
    }

    // Tests channels outside the unit interval are rejected
    // Verified by removing the range check
    #[test]
    fn test_palette_channel_range_enforced() {
        let mut colors = vec![[0.5, 0.5, 0.5]; PALETTE_SIZE];
        colors[17] = [0.5, 1.5, 0.5];
        let result = Palette::new("color_map1", "bright", colors);
        let Err(error) = result else {
            unreachable!("out-of-range channel must fail");
        };
        assert!(error.to_string().contains("entry 17"));

        let mut colors = vec![[0.5, 0.5, 0.5]; PALETTE_SIZE];
        colors[0] = [f64::NAN, 0.0, 0.0];
        assert!(Palette::new("color_map1", "nan", colors).is_err());
    }

    // Tests scaling by 256 with truncation and clamping at 255
    // Verified by scaling by 255 instead of 256
    #[test]
    fn test_scale_channel() {
        assert_eq!(scale_channel(0.0), 0);
        assert_eq!(scale_channel(0.5), 128);
        assert_eq!(scale_channel(10.0 / 255.0), 10);
        assert_eq!(scale_channel(0.999), 255);
        assert_eq!(scale_channel(1.0), 255);
    }

    // Tests white anchors clamp instead of wrapping to zero
    // Verified by casting 256 directly to u8
    #[test]
    fn test_greys_white_clamped() {
        let greys = Palette::resolve(&SchemeResolver, "color_map1", "Greys");
        assert!(greys.is_ok());
        let greys = greys.ok();
        assert_eq!(greys.as_ref().and_then(|p| p.rgb(0)), Some([255, 255, 255]));
        assert_eq!(
            greys.as_ref().and_then(|p| p.rgb(PALETTE_SIZE - 1)),
            Some([0, 0, 0])
        );
        assert_eq!(greys.as_ref().and_then(|p| p.rgb(PALETTE_SIZE)), None);
        assert_eq!(greys.as_ref().map(Palette::name), Some("Greys"));
    }

    // Tests triple conversion applies per channel
    // Verified by reusing the red channel for all three
    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb([1.0, 0.5, 0.0]), [255, 128, 0]);
    }
}

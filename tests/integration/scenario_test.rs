// End-to-end stamping scenarios through the public API

use super::test_harness::{bordered_logo, inverted, Workspace, DARK_BORDER, LIGHT_BORDER};
use logostamp::error::StampError;
use logostamp::raster::{self, RasterImage};
use logostamp::watermark::{
    contrast_ratio, embed_best_logo, embed_tiled_watermark, evaluate_candidates,
    relative_luminance, render_alone, select_best_placement, Corner, LogoPair,
    LuminanceEdgeScorer, MeanColorDistanceScorer, Placement, ScoringStrategy, Variant,
    WatermarkConfig,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn logo_pair() -> LogoPair {
    LogoPair::new(
        bordered_logo(100, 50, LIGHT_BORDER),
        bordered_logo(100, 50, DARK_BORDER),
    )
}

#[test]
fn test_dark_logo_wins_on_white_photo() {
    let image = RasterImage::filled(1000, 800, WHITE);
    let logos = logo_pair();

    for scorer in [
        &LuminanceEdgeScorer as &dyn logostamp::watermark::ContrastScorer,
        &MeanColorDistanceScorer,
    ] {
        let best = select_best_placement(&logos, &image, scorer).unwrap();
        assert_eq!(best.ordinal(), 4, "strategy {}", scorer.name());
        assert_eq!(best, Placement::new(Corner::TopLeft, Variant::Dark));
    }
}

#[test]
fn test_inverted_dark_variant_on_white_photo() {
    let image = RasterImage::filled(1000, 800, WHITE);
    let light = bordered_logo(100, 50, LIGHT_BORDER);
    let dark = inverted(&light);
    assert_eq!(dark.rgb(0, 0), [25, 25, 25]);
    assert_eq!(dark.rgb(50, 25), [255, 255, 255]);
    let logos = LogoPair::new(light, dark);

    // The glyph covers 50x26 of the 100x50 logo, so the dark mean is
    // (3700 * 25 + 1300 * 255) / 5000 = 84.8 against white. The light
    // border is 230 with the glyph excluded as ink.
    let candidates = evaluate_candidates(&logos, &image, &MeanColorDistanceScorer).unwrap();
    let expected_dark = (255.0f64 - 84.8) * 3f64.sqrt();
    let expected_light = 25.0 * 3f64.sqrt();
    for candidate in &candidates {
        let expected = match candidate.placement.variant {
            Variant::Dark => expected_dark,
            Variant::Light => expected_light,
        };
        assert!((candidate.score - expected).abs() < 1e-6);
    }

    let best = select_best_placement(&logos, &image, &MeanColorDistanceScorer).unwrap();
    assert_eq!(best.ordinal(), 4);

    // The inverted variant has no ink edges, so edge scoring cannot rate it.
    let err = select_best_placement(&logos, &image, &LuminanceEdgeScorer).unwrap_err();
    assert_eq!(
        err,
        StampError::InsufficientSamples {
            strategy: "luminance-edge"
        }
    );
}

#[test]
fn test_luminance_edge_score_matches_wcag_ratio() {
    let image = RasterImage::filled(1000, 800, WHITE);
    let candidates = evaluate_candidates(&logo_pair(), &image, &LuminanceEdgeScorer).unwrap();

    let expected = contrast_ratio(
        relative_luminance([25, 25, 25]),
        relative_luminance([255, 255, 255]),
    );
    assert!((expected - 17.5817).abs() < 1e-3);

    for candidate in candidates
        .iter()
        .filter(|c| c.placement.variant == Variant::Dark)
    {
        assert!((candidate.score - expected).abs() < 1e-9);
    }
    for candidate in candidates
        .iter()
        .filter(|c| c.placement.variant == Variant::Light)
    {
        assert!(candidate.score < 1.5);
    }
}

#[test]
fn test_candidate_positions_are_flush_with_corners() {
    let image = RasterImage::filled(1000, 800, WHITE);
    let candidates = evaluate_candidates(&logo_pair(), &image, &MeanColorDistanceScorer).unwrap();

    let positions: Vec<(u32, u32)> = candidates
        .iter()
        .take(4)
        .map(|c| (c.position.x, c.position.y))
        .collect();
    assert_eq!(positions, vec![(0, 0), (900, 0), (0, 750), (900, 750)]);
}

#[test]
fn test_embed_best_logo_from_files() {
    let ws = Workspace::new().with_logos();
    // Mid-grey photo with a black bottom-right quadrant: the light logo on
    // black is the only high-contrast candidate.
    let mut photo = RasterImage::filled(400, 300, [128, 128, 128, 255]);
    for y in 150..300 {
        for x in 200..400 {
            photo.pixel_mut(x, y).copy_from_slice(&[0, 0, 0, 255]);
        }
    }
    let path = ws.add_image("photo.png", &photo);

    let stamped = embed_best_logo(
        ws.light_logo(),
        ws.dark_logo(),
        &path,
        50,
        ScoringStrategy::MeanColorDistance,
    )
    .unwrap();

    assert_eq!(stamped.dimensions(), (400, 300));
    // 100x50 logo scaled to 50x25, light variant in the bottom-right corner
    assert_eq!(stamped.rgb(351, 276), [230, 230, 230]);
    assert_eq!(stamped.rgb(0, 0), [128, 128, 128]);
}

#[test]
fn test_transparent_logo_areas_count_as_ink() {
    let logo = RasterImage::filled(8, 4, [200, 10, 10, 0]);
    let render = render_alone(&logo).unwrap();
    assert!(render.rgb_pixels().all(|rgb| rgb == [0, 0, 0]));
}

#[test]
fn test_tiled_watermark_from_files() {
    let ws = Workspace::new().with_logos();
    let path = ws.add_image("photo.png", &RasterImage::filled(500, 400, WHITE));
    let config = WatermarkConfig {
        logo: ws.light_logo(),
        spacing: 2.0,
        opacity: 0.5,
        logo_scale: 0.5,
        ..Default::default()
    };

    let stamped = embed_tiled_watermark(&path, ws.dark_logo(), &config).unwrap();

    assert_eq!(stamped.dimensions(), (500, 400));
    assert_ne!(stamped, raster::load(&path).unwrap());
}

use folio::{
    ContentDrawer, CropBox, Document, FolioError, InMemoryDocument, NoContent, PageGeometry,
    PageRenderer, PixelFormat, Rect, RenderSurface, Rgba8,
};

const RED: Rgba8 = Rgba8 {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

/// Paints one fixed page-space rectangle; the workhorse for pinning where
/// the page transform puts content.
struct FillRect {
    rect: Rect,
    color: Rgba8,
}

impl ContentDrawer for FillRect {
    fn draw_page(&self, surface: &mut dyn RenderSurface, _crop: CropBox) -> anyhow::Result<()> {
        surface.fill_rect(self.rect, self.color);
        Ok(())
    }
}

/// Paints the whole crop region.
struct FullBleed;

impl ContentDrawer for FullBleed {
    fn draw_page(&self, surface: &mut dyn RenderSurface, crop: CropBox) -> anyhow::Result<()> {
        surface.fill_rect(
            Rect::new(0.0, 0.0, f64::from(crop.width), f64::from(crop.height)),
            RED,
        );
        Ok(())
    }
}

struct AlwaysFails;

impl ContentDrawer for AlwaysFails {
    fn draw_page(&self, _surface: &mut dyn RenderSurface, _crop: CropBox) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("glyph cache exploded"))
    }
}

fn single_page_doc(width: f32, height: f32, rotation_degrees: i32) -> InMemoryDocument {
    InMemoryDocument::new(vec![PageGeometry::new(
        CropBox::new(width, height),
        rotation_degrees,
    )])
}

fn painted_pixels(raster: &folio::PageRaster, color: Rgba8) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            if raster.pixel(x, y).unwrap() == color {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn rotation_round_trip_dimensions() {
    for (rotation, expected) in [
        (0, (200, 100)),
        (90, (100, 200)),
        (180, (200, 100)),
        (270, (100, 200)),
    ] {
        let doc = single_page_doc(200.0, 100.0, rotation);
        let renderer = PageRenderer::new(&doc, &NoContent);
        let raster = renderer.render_image(0).unwrap();
        assert_eq!(
            (raster.width(), raster.height()),
            expected,
            "rotation {rotation}"
        );
    }
}

#[test]
fn rgba_background_is_fully_transparent() {
    let doc = single_page_doc(20.0, 10.0, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let raster = renderer.render_image(0).unwrap();

    assert_eq!(raster.format(), PixelFormat::Rgba8);
    assert!(raster.data().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn rgb_background_is_opaque_white() {
    let doc = single_page_doc(20.0, 10.0, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let raster = renderer
        .render_image_with(0, 1.0, PixelFormat::Rgb8)
        .unwrap();

    assert_eq!(raster.format(), PixelFormat::Rgb8);
    assert!(raster.data().iter().all(|&b| b == 255));
}

#[test]
fn identical_requests_produce_identical_rasters() {
    let doc = single_page_doc(50.0, 40.0, 90);
    let drawer = FillRect {
        rect: Rect::new(2.0, 3.0, 17.0, 19.0),
        color: RED,
    };
    let renderer = PageRenderer::new(&doc, &drawer);

    let a = renderer
        .render_image_with(0, 1.5, PixelFormat::Rgba8)
        .unwrap();
    let b = renderer
        .render_image_with(0, 1.5, PixelFormat::Rgba8)
        .unwrap();
    assert_eq!(a, b);
    assert!(!painted_pixels(&a, RED).is_empty());
}

#[test]
fn index_one_past_the_end_is_page_not_found() {
    let doc = single_page_doc(10.0, 10.0, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let err = renderer.render_image(doc.page_count()).unwrap_err();
    assert!(matches!(
        err,
        FolioError::PageNotFound {
            index: 1,
            page_count: 1
        }
    ));
}

#[test]
fn zero_crop_width_is_invalid_geometry() {
    let doc = single_page_doc(0.0, 100.0, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    assert!(matches!(
        renderer.render_image(0).unwrap_err(),
        FolioError::InvalidGeometry(_)
    ));
}

#[test]
fn non_cardinal_rotation_is_invalid_geometry() {
    let doc = single_page_doc(100.0, 100.0, 45);
    let renderer = PageRenderer::new(&doc, &NoContent);
    assert!(matches!(
        renderer.render_image(0).unwrap_err(),
        FolioError::InvalidGeometry(_)
    ));
}

#[test]
fn drawer_failure_discards_the_raster() {
    let doc = single_page_doc(100.0, 100.0, 0);
    let renderer = PageRenderer::new(&doc, &AlwaysFails);
    let err = renderer.render_image(0).unwrap_err();
    assert!(matches!(err, FolioError::ContentDraw(_)));
    assert!(err.to_string().contains("content draw failed"));
}

#[test]
fn oversized_page_fails_allocation_not_panic() {
    let doc = single_page_doc(1.0e9, 1.0e9, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let err = renderer.render_image_with(0, 10.0, PixelFormat::Rgba8).unwrap_err();
    assert!(matches!(err, FolioError::Allocation { .. }));
}

#[test]
fn doubling_scale_doubles_output() {
    let doc = single_page_doc(200.0, 100.0, 270);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let base = renderer.render_image(0).unwrap();
    let doubled = renderer
        .render_image_with(0, 2.0, PixelFormat::Rgba8)
        .unwrap();
    assert_eq!(doubled.width(), base.width() * 2);
    assert_eq!(doubled.height(), base.height() * 2);
}

#[test]
fn dpi_entry_point_scales_from_72() {
    let doc = single_page_doc(200.0, 100.0, 0);
    let renderer = PageRenderer::new(&doc, &NoContent);
    let raster = renderer.render_image_at_dpi(0, 144.0).unwrap();
    assert_eq!((raster.width(), raster.height()), (400, 200));
}

// The transform-placement suite: a drawer paints the page-space square
// [0,10)x[0,10); each rotation must put it on exactly the expected device
// pixels. Wrong composition order, a flipped sign, or a mis-sized translate
// all move the square somewhere else.

fn placement(rotation_degrees: i32, scale: f32) -> (folio::PageRaster, Vec<(u32, u32)>) {
    let doc = single_page_doc(200.0, 100.0, rotation_degrees);
    let drawer = FillRect {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        color: RED,
    };
    let renderer = PageRenderer::new(&doc, &drawer);
    let raster = renderer
        .render_image_with(0, scale, PixelFormat::Rgba8)
        .unwrap();
    let painted = painted_pixels(&raster, RED);
    (raster, painted)
}

fn expected_block(xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in ys {
        for x in xs.clone() {
            out.push((x, y));
        }
    }
    out
}

#[test]
fn upright_page_paints_origin_square_top_left() {
    let (_, painted) = placement(0, 1.0);
    assert_eq!(painted, expected_block(0..10, 0..10));
}

#[test]
fn quarter_turn_moves_origin_square_to_top_right() {
    let (raster, painted) = placement(90, 1.0);
    assert_eq!((raster.width(), raster.height()), (100, 200));
    assert_eq!(painted, expected_block(90..100, 0..10));
}

#[test]
fn half_turn_moves_origin_square_to_bottom_right() {
    let (raster, painted) = placement(180, 1.0);
    assert_eq!((raster.width(), raster.height()), (200, 100));
    assert_eq!(painted, expected_block(190..200, 90..100));
}

#[test]
fn three_quarter_turn_moves_origin_square_to_bottom_left() {
    let (raster, painted) = placement(270, 1.0);
    assert_eq!((raster.width(), raster.height()), (100, 200));
    assert_eq!(painted, expected_block(0..10, 190..200));
}

#[test]
fn quarter_turn_placement_scales_with_the_page() {
    let (raster, painted) = placement(90, 2.0);
    assert_eq!((raster.width(), raster.height()), (200, 400));
    assert_eq!(painted, expected_block(180..200, 0..20));
}

#[test]
fn rotated_crop_fills_the_whole_raster() {
    for rotation in [0, 90, 180, 270] {
        let doc = single_page_doc(200.0, 100.0, rotation);
        let renderer = PageRenderer::new(&doc, &FullBleed);
        let raster = renderer.render_image(0).unwrap();
        let total = (raster.width() * raster.height()) as usize;
        assert_eq!(
            painted_pixels(&raster, RED).len(),
            total,
            "rotation {rotation} left background showing"
        );
    }
}

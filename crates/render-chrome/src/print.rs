use fleetdoc_types::PageGeometry;
use headless_chrome::types::PrintToPdfOptions;

/// Print settings for `Page.printToPDF`: the given paper size and uniform
/// margins, CSS backgrounds on, no browser header or footer.
pub fn print_options(page: &PageGeometry) -> PrintToPdfOptions {
    let margin = page.margin_in();
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(false),
        print_background: Some(true),
        paper_width: Some(page.width_in()),
        paper_height: Some(page.height_in()),
        margin_top: Some(margin),
        margin_bottom: Some(margin),
        margin_left: Some(margin),
        margin_right: Some(margin),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_with_backgrounds() {
        let options = print_options(&PageGeometry::a4());
        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.display_header_footer, Some(false));
        let width = options.paper_width.unwrap();
        let height = options.paper_height.unwrap();
        assert!((width - 8.27).abs() < 0.01, "width {width}");
        assert!((height - 11.69).abs() < 0.01, "height {height}");
    }

    #[test]
    fn margins_are_uniform() {
        let options = print_options(&PageGeometry::a4().with_margin_mm(25.4));
        for margin in [
            options.margin_top,
            options.margin_bottom,
            options.margin_left,
            options.margin_right,
        ] {
            assert!((margin.unwrap() - 1.0).abs() < 1e-6);
        }
    }
}

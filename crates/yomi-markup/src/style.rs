use yomi_types::{LayoutMode, StyleParams};

const FONT_FAMILY: &str =
    "'UD デジタル 教科書体 NK-R', 'UD Digi Kyokashotai NK-R', 'Century', serif";

/// `<style>` block for the document head
pub fn style_block(layout: LayoutMode, style: &StyleParams) -> String {
    match layout {
        LayoutMode::Flowing => flowing(style),
        LayoutMode::Tabular => tabular(style),
    }
}

fn flowing(style: &StyleParams) -> String {
    format!(
        "<style>\n\
         body {{ font-family: {FONT_FAMILY}; font-size: {}pt; color: #000000; line-height: {}; }}\n\
         ruby {{ ruby-align: center; }}\n\
         rt {{ font-family: {FONT_FAMILY}; font-size: {}pt; color: #000000; }}\n\
         </style>",
        style.body_font_size, style.line_height, style.ruby_font_size
    )
}

fn tabular(style: &StyleParams) -> String {
    format!(
        "<style>\n\
         body {{ font-family: {FONT_FAMILY}; background-color: white; padding: 10px; }}\n\
         table {{ width: 100%; border-collapse: collapse; border: 2px solid black; }}\n\
         td {{ border: 2px solid black; padding: {}px; font-size: {}pt; line-height: {}; vertical-align: middle; }}\n\
         ruby {{ ruby-align: center; }}\n\
         rt {{ font-size: {}pt; color: #000000; }}\n\
         </style>",
        style.cell_padding, style.body_font_size, style.line_height, style.ruby_font_size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flowing_style_uses_parameters() {
        let style = StyleParams {
            body_font_size: 24,
            ruby_font_size: 12,
            line_height: 3.0,
            cell_padding: 40,
        };
        let css = style_block(LayoutMode::Flowing, &style);
        assert!(css.contains("font-size: 24pt"));
        assert!(css.contains("line-height: 3;"));
        assert!(css.contains("rt { font-family:"));
        assert!(css.contains("font-size: 12pt"));
        assert!(!css.contains("40px"));
    }

    #[test]
    fn tabular_style_pads_cells() {
        let css = style_block(LayoutMode::Tabular, &StyleParams::for_layout(LayoutMode::Tabular));
        assert!(css.contains("padding: 10px; font-size: 20pt; line-height: 2.5;"));
        assert!(css.contains("rt { font-size: 10pt;"));
    }

    #[test]
    fn line_height_keeps_every_decimal() {
        let style = StyleParams {
            line_height: 2.25,
            ..StyleParams::for_layout(LayoutMode::Flowing)
        };
        let css = style_block(LayoutMode::Flowing, &style);
        assert!(css.contains("line-height: 2.25;"));

        let css = style_block(LayoutMode::Tabular, &StyleParams { line_height: 1.75, ..style });
        assert!(css.contains("line-height: 1.75;"));
    }
}

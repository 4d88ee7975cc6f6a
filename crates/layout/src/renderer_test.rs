#![cfg(test)]

use crate::elements::LayoutElement;
use crate::fonts;
use crate::renderer::{
    ContentRenderer, INTER_ELEMENT_SPACING, LIST_INDENT, LIST_SPACING, TABLE_ROW_HEIGHT,
};
use crate::test_utils::{default_styling, find_first_text, test_bounds, text_contents};
use folio_model::{ChartType, ContentNode, ListItem};
use folio_style::{TextAlign, TextFormatting};
use folio_types::Point;

fn render(node: &ContentNode) -> (Vec<crate::PositionedElement>, Point) {
    let styling = default_styling();
    let renderer = ContentRenderer::new(&styling);
    let bounds = test_bounds();
    let mut out = Vec::new();
    let end = renderer.render(node, Point::new(bounds.left, bounds.top), bounds, &mut out);
    (out, end)
}

#[test]
fn ordered_list_renders_numeric_markers_in_order() {
    let node = ContentNode::List {
        items: vec![ListItem::new("x"), ListItem::new("y")],
        ordered: true,
        style: None,
    };
    let (elements, _) = render(&node);
    let texts = text_contents(&elements);
    assert_eq!(texts, vec!["1.", "x", "2.", "y"]);

    let first_marker = find_first_text(&elements, "1.").unwrap();
    let second_marker = find_first_text(&elements, "2.").unwrap();
    assert!(second_marker.y > first_marker.y);
}

#[test]
fn unordered_list_uses_bullet_glyph() {
    let node = ContentNode::List {
        items: vec![ListItem::new("only")],
        ordered: false,
        style: None,
    };
    let (elements, _) = render(&node);
    assert_eq!(text_contents(&elements), vec!["\u{2022}", "only"]);
}

#[test]
fn empty_list_advances_nothing() {
    let node = ContentNode::List {
        items: vec![],
        ordered: false,
        style: None,
    };
    let (elements, end) = render(&node);
    assert!(elements.is_empty());
    assert_eq!(end.y, test_bounds().top);
}

#[test]
fn sub_items_indent_one_level_deeper() {
    let node = ContentNode::List {
        items: vec![ListItem {
            text: "parent".into(),
            sub_items: vec![ListItem::new("child")],
            checked: None,
        }],
        ordered: false,
        style: None,
    };
    let (elements, _) = render(&node);
    let bounds = test_bounds();

    let parent = find_first_text(&elements, "parent").unwrap();
    let child = find_first_text(&elements, "child").unwrap();
    assert_eq!(parent.x, bounds.left + LIST_INDENT);
    assert_eq!(child.x, bounds.left + 2.0 * LIST_INDENT);
    assert!(child.y > parent.y);
}

#[test]
fn checklist_items_render_checkbox_prefix() {
    let node = ContentNode::List {
        items: vec![
            ListItem {
                text: "done".into(),
                sub_items: vec![],
                checked: Some(true),
            },
            ListItem {
                text: "todo".into(),
                sub_items: vec![],
                checked: Some(false),
            },
        ],
        ordered: false,
        style: None,
    };
    let (elements, _) = render(&node);
    assert!(find_first_text(&elements, "[x] done").is_some());
    assert!(find_first_text(&elements, "[ ] todo").is_some());
}

#[test]
fn list_advance_counts_wrapped_lines_and_spacing() {
    let node = ContentNode::List {
        items: vec![ListItem::new("short")],
        ordered: false,
        style: None,
    };
    let (_, end) = render(&node);
    let styling = default_styling();
    let expected = fonts::line_height(styling.base_font_size) + LIST_SPACING;
    assert!((end.y - test_bounds().top - expected).abs() < 0.001);
}

#[test]
fn empty_table_renders_header_band_only() {
    let node = ContentNode::Table {
        headers: vec!["A".into(), "B".into()],
        rows: vec![],
        styling: None,
    };
    let (elements, end) = render(&node);

    // Advance is exactly one row height.
    assert!((end.y - test_bounds().top - TABLE_ROW_HEIGHT).abs() < 0.001);
    assert!(find_first_text(&elements, "A").is_some());
    assert!(find_first_text(&elements, "B").is_some());
    // Only the two header cells carry text.
    assert_eq!(text_contents(&elements).len(), 2);
}

#[test]
fn table_advance_is_rows_plus_header_times_row_height() {
    let node = ContentNode::Table {
        headers: vec!["A".into(), "B".into()],
        rows: vec![
            vec!["1".into(), "2".into()],
            vec!["3".into(), "4".into()],
            vec!["5".into(), "6".into()],
        ],
        styling: None,
    };
    let (_, end) = render(&node);
    assert!((end.y - test_bounds().top - 4.0 * TABLE_ROW_HEIGHT).abs() < 0.001);
}

#[test]
fn table_rows_are_normalized_to_header_cardinality() {
    let node = ContentNode::Table {
        headers: vec!["A".into(), "B".into()],
        rows: vec![
            vec!["only".into()],
            vec!["x".into(), "y".into(), "extra".into()],
        ],
        styling: None,
    };
    let (elements, _) = render(&node);
    let texts = text_contents(&elements);
    assert!(!texts.contains(&"extra"));
    // Headers plus the three surviving cells.
    assert_eq!(texts, vec!["A", "B", "only", "x", "y"]);
}

#[test]
fn table_columns_divide_bounds_uniformly() {
    let node = ContentNode::Table {
        headers: vec!["A".into(), "B".into()],
        rows: vec![vec!["left".into(), "right".into()]],
        styling: None,
    };
    let (elements, _) = render(&node);
    let bounds = test_bounds();
    let right_cell = find_first_text(&elements, "right").unwrap();
    // Second column starts at the midpoint of the content width.
    assert!((right_cell.x - (bounds.left + bounds.width / 2.0)).abs() < 5.0);
}

#[test]
fn mixed_nested_five_deep_renders_leaves_in_document_order() {
    // Mixed(a, Mixed(b, Mixed(c, Mixed(d, Mixed(e)))))
    let node = ContentNode::mixed(vec![
        ContentNode::text("a"),
        ContentNode::mixed(vec![
            ContentNode::text("b"),
            ContentNode::mixed(vec![
                ContentNode::text("c"),
                ContentNode::mixed(vec![
                    ContentNode::text("d"),
                    ContentNode::mixed(vec![ContentNode::text("e")]),
                ]),
            ]),
        ]),
    ]);
    let (elements, _) = render(&node);
    assert_eq!(text_contents(&elements), vec!["a", "b", "c", "d", "e"]);

    let ys: Vec<f32> = elements.iter().map(|el| el.y).collect();
    for pair in ys.windows(2) {
        assert!(pair[1] > pair[0], "cursor must strictly advance: {:?}", ys);
    }
}

#[test]
fn mixed_inserts_fixed_spacing_between_elements() {
    let node = ContentNode::mixed(vec![ContentNode::text("one"), ContentNode::text("two")]);
    let (elements, _) = render(&node);
    let styling = default_styling();
    let line_height = fonts::line_height(styling.base_font_size);

    let first = find_first_text(&elements, "one").unwrap();
    let second = find_first_text(&elements, "two").unwrap();
    assert!((second.y - first.y - line_height - INTER_ELEMENT_SPACING).abs() < 0.001);
}

#[test]
fn centered_text_is_centered_per_line() {
    let node = ContentNode::formatted_text(
        "mid",
        TextFormatting {
            text_align: Some(TextAlign::Center),
            ..Default::default()
        },
    );
    let (elements, _) = render(&node);
    let bounds = test_bounds();
    let el = find_first_text(&elements, "mid").unwrap();
    let expected = bounds.left + (bounds.width - el.width) / 2.0;
    assert!((el.x - expected).abs() < 0.001);
}

#[test]
fn text_line_height_factor_scales_advance() {
    let single = ContentNode::text("line");
    let (_, end_default) = render(&single);

    let spaced = ContentNode::formatted_text(
        "line",
        TextFormatting {
            line_height: Some(2.0),
            ..Default::default()
        },
    );
    let (_, end_spaced) = render(&spaced);

    let styling = default_styling();
    let expected_default = styling.base_font_size * 1.2;
    let expected_spaced = styling.base_font_size * 2.0;
    assert!((end_default.y - test_bounds().top - expected_default).abs() < 0.001);
    assert!((end_spaced.y - test_bounds().top - expected_spaced).abs() < 0.001);
}

#[test]
fn chart_renders_placeholder_box_with_caption() {
    let node = ContentNode::Chart {
        chart_type: ChartType::Bar,
        data: serde_json::json!({}),
        options: None,
        title: Some("Progress by week".into()),
        width: Some(300.0),
        height: Some(150.0),
    };
    let (elements, end) = render(&node);

    let has_box = elements
        .iter()
        .any(|el| matches!(&el.element, LayoutElement::Rect(r) if r.stroke.is_some()));
    assert!(has_box);
    assert!(find_first_text(&elements, "Progress by week").is_some());
    assert!((end.y - test_bounds().top - 150.0).abs() < 0.001);
}

#[test]
fn unresolvable_image_draws_placeholder_and_advances_height() {
    let node = ContentNode::Image {
        src: "https://example.com/missing.png".into(),
        alt: "a volcano".into(),
        width: Some(200.0),
        height: Some(120.0),
        alignment: None,
        caption: None,
    };
    let (elements, end) = render(&node);
    assert!(find_first_text(&elements, "a volcano").is_some());
    assert!((end.y - test_bounds().top - 120.0).abs() < 0.001);
}

#[test]
fn measure_matches_real_render_advance() {
    let node = ContentNode::mixed(vec![
        ContentNode::text("some wrapped text that is long enough to span a couple of lines in the content area"),
        ContentNode::Table {
            headers: vec!["A".into()],
            rows: vec![vec!["1".into()]],
            styling: None,
        },
    ]);
    let styling = default_styling();
    let renderer = ContentRenderer::new(&styling);
    let bounds = test_bounds();

    let measured = renderer.measure(&node, bounds);
    let mut out = Vec::new();
    let end = renderer.render(&node, Point::new(bounds.left, bounds.top), bounds, &mut out);
    assert!((measured - (end.y - bounds.top)).abs() < 0.001);
}

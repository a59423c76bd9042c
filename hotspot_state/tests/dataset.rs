// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding region datasets from JSON.

use hotspot_region::{DatasetError, LayoutVariant, Shape, ShapeKind, VariantSet};
use kurbo::{Point, Rect};

#[test]
fn decodes_rect_and_polygon_literals() {
    let rect: Shape =
        serde_json::from_str(r#"{ "kind": "rect", "x1": 626, "y1": 47, "x2": 671, "y2": 95 }"#)
            .unwrap();
    assert_eq!(rect.bounding_box(), Rect::new(626.0, 47.0, 671.0, 95.0));

    let poly: Shape = serde_json::from_str(
        r#"{ "kind": "polygon", "vertices": [[486, 508], [498, 481], [574, 500]] }"#,
    )
    .unwrap();
    assert_eq!(poly.kind(), ShapeKind::Polygon);
    assert_eq!(poly.centroid(), Point::new(1558.0 / 3.0, 1489.0 / 3.0));
}

#[test]
fn shapes_are_validated_while_decoding() {
    let inverted = r#"{ "kind": "rect", "x1": 10, "y1": 10, "x2": 5, "y2": 20 }"#;
    let err = serde_json::from_str::<Shape>(inverted).unwrap_err();
    assert!(err.to_string().contains("is empty"), "{err}");

    let unknown = r#"{ "kind": "circle", "r": 4 }"#;
    assert!(serde_json::from_str::<Shape>(unknown).is_err());
}

#[test]
fn shape_encoding_is_readable_back() {
    let shape = Shape::polygon([(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]).unwrap();
    let json = serde_json::to_string(&shape).unwrap();
    assert!(json.starts_with(r#"{"kind":"polygon""#), "{json}");
    assert_eq!(serde_json::from_str::<Shape>(&json).unwrap(), shape);
}

#[test]
fn title_is_optional() {
    let json = r#"[{
        "name": "only",
        "min_viewport_width": 0,
        "natural_width": 50,
        "natural_height": 50,
        "regions": [
            {
                "id": "x",
                "shape": { "kind": "rect", "x1": 0, "y1": 0, "x2": 50, "y2": 50 },
                "description": "whole image"
            }
        ]
    }]"#;
    let variants: Vec<LayoutVariant> = serde_json::from_str(json).unwrap();
    let set = VariantSet::new(variants).unwrap();
    let region = &set.resolve(1000.0).regions[0];
    assert_eq!(region.title, "");
    assert_eq!(region.description, "whole image");
}

#[test]
fn structured_payloads_decode() {
    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Card {
        heading: String,
        link: Option<String>,
    }

    let json = r#"[{
        "name": "base",
        "min_viewport_width": 0,
        "natural_width": 10,
        "natural_height": 10,
        "regions": [
            { "id": "x", "shape": { "kind": "rect", "x1": 1, "y1": 1, "x2": 2, "y2": 2 },
              "description": { "heading": "Plot 7", "link": null } }
        ]
    }]"#;
    let variants: Vec<LayoutVariant<Card>> = serde_json::from_str(json).unwrap();
    let set = VariantSet::new(variants).unwrap();
    assert_eq!(
        set.resolve(0.0).regions[0].description,
        Card {
            heading: "Plot 7".into(),
            link: None,
        }
    );
}

#[test]
fn decoding_does_not_skip_dataset_validation() {
    let json = r#"[
        {
            "name": "desktop",
            "min_viewport_width": 768,
            "natural_width": 10,
            "natural_height": 10,
            "regions": []
        }
    ]"#;
    let variants: Vec<LayoutVariant> = serde_json::from_str(json).unwrap();
    assert_eq!(VariantSet::new(variants), Err(DatasetError::MissingBaseVariant));
}

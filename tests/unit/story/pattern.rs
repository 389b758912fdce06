use super::*;

#[test]
fn solid_without_type_deserializes() {
    let p: Pattern = serde_json::from_str(r#"{ "color": { "r": 255, "g": 0, "b": 16 } }"#).unwrap();
    assert_eq!(p, Pattern::solid(Color::rgb(255, 0, 16)));
    assert_eq!(p.to_css(), "#ff0010");
}

#[test]
fn translucent_color_uses_rgba() {
    let c = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.5,
    };
    assert_eq!(c.to_css(), "rgba(0,0,0,0.5)");
}

#[test]
fn linear_gradient_css_offsets_rotation_by_half_turn() {
    let p: Pattern = serde_json::from_str(
        r#"{
            "type": "linear",
            "rotation": 0.25,
            "stops": [
                { "color": { "r": 0, "g": 0, "b": 0 }, "position": 0 },
                { "color": { "r": 255, "g": 255, "b": 255 }, "position": 1 }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(
        p.to_css(),
        "linear-gradient(0.75turn,#000000 0%,#ffffff 100%)"
    );
}

#[test]
fn gradient_alpha_multiplies_stop_alpha() {
    let p = Pattern::Radial {
        stops: vec![GradientStop {
            color: Color::rgb(10, 20, 30),
            position: 0.5,
        }],
        alpha: Some(0.5),
    };
    assert_eq!(p.to_css(), "radial-gradient(rgba(10,20,30,0.5) 50%)");
}

#[test]
fn unknown_pattern_type_is_rejected() {
    let err = serde_json::from_str::<Pattern>(r#"{ "type": "conic", "stops": [] }"#);
    assert!(err.is_err());
}

#[test]
fn transparency_checks_every_stop() {
    let clear = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };
    assert!(Pattern::solid(clear).is_transparent());
    assert!(!Pattern::default().is_transparent());
}

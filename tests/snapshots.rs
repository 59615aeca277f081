use glam::dvec2;
use pathtext::shapes::{
    CircleParams, LineOrientation, LineParams, RectangleParams, ShapeGenerator, SpiralParams,
    Viewport,
};
use pathtext::{Path, PathBuilder, parse_path_data};

#[test]
fn sharp_rectangle_path_data() {
    let path = RectangleParams::default()
        .build(&Viewport::new(100.0, 100.0))
        .unwrap();
    insta::assert_snapshot!(path, @"M 50 80 L 10 80 L 10 20 L 90 20 L 90 80 Z");
}

#[test]
fn line_path_data() {
    let horizontal = LineParams::default().build(&Viewport::new(100.0, 100.0)).unwrap();
    insta::assert_snapshot!(horizontal, @"M 10 50 L 90 50");

    let diagonal = LineParams::default()
        .with_orientation(LineOrientation::DiagonalUp)
        .build(&Viewport::new(200.0, 100.0))
        .unwrap();
    insta::assert_snapshot!(diagonal, @"M 20 90 L 180 10");
}

#[test]
fn relative_commands_print_absolute() {
    let path = parse_path_data("m 10 10 l 5 0 h 5 v -5 z").unwrap();
    insta::assert_snapshot!(path, @"M 10 10 L 15 10 L 20 10 L 20 5 Z");
}

#[test]
fn builder_output_prints_every_segment_kind() {
    let mut builder = PathBuilder::new();
    builder.move_to(dvec2(0.0, 0.0));
    builder.quad_to(dvec2(5.0, -5.0), dvec2(10.0, 0.0));
    builder.cubic_to(dvec2(12.5, 2.5), dvec2(17.5, 2.5), dvec2(20.0, 0.0));
    builder.line_to(dvec2(20.0, 10.0));
    builder.close();
    let path: Path = builder.build().unwrap();
    insta::assert_snapshot!(path, @"M 0 0 Q 5 -5 10 0 C 12.5 2.5 17.5 2.5 20 0 L 20 10 Z");
}

#[test]
fn error_messages() {
    let viewport = Viewport::new(100.0, 100.0);

    let err = SpiralParams::default()
        .with_theta_step(0.0)
        .build(&viewport)
        .unwrap_err();
    insta::assert_snapshot!(err, @"spiral theta step is zero");

    let err = CircleParams::default()
        .with_diameter(-1.0)
        .build(&viewport)
        .unwrap_err();
    insta::assert_snapshot!(err, @"invalid diameter: -1 (value is negative)");

    let err = parse_path_data("M 0 0 L 1 2 3").unwrap_err();
    insta::assert_snapshot!(err, @"command 'L' expects 2 numbers per repetition");

    let err = parse_path_data("L 1 1").unwrap_err();
    insta::assert_snapshot!(err, @"segment 0 draws without a current point");
}

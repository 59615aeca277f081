use pathtext::layout::{GlyphRun, LayoutOptions, PhraseAnchor};
use pathtext::shapes::{
    CircleParams, HeartParams, InfinityParams, PolygonParams, ShapeGenerator, ShapeKind,
    SpiralParams, StarParams,
};
use pathtext::{AnimationState, Direction, Viewport};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "round and round it goes".to_string());
    let viewport = Viewport::new(400.0, 400.0);
    let run = GlyphRun::proportional(&text, 18.0);
    let options = LayoutOptions::default().with_phrase_anchor(PhraseAnchor::Top);

    let shapes: [ShapeKind; 6] = [
        CircleParams::default().into(),
        PolygonParams::hexagon().into(),
        StarParams::default().into(),
        HeartParams::default().into(),
        InfinityParams::default().into(),
        SpiralParams::default().into(),
    ];

    for shape in &shapes {
        let path = shape.build(&viewport)?;
        let length = path.total_length();
        println!("{} (length {length:.1})", shape.name());

        let still = pathtext::layout_on_shape(&run, shape, &viewport, &options, None)?;
        if let Some(first) = still.placements.first() {
            println!(
                "  static: first glyph at ({:.1}, {:.1}), {:.1}°",
                first.position.x,
                first.position.y,
                first.angle.to_degrees()
            );
        }

        let mut state =
            AnimationState::new(6.0, Direction::Clockwise).with_travel(shape.travel());
        for frame in 0..5 {
            state.advance(10, length);
            let result =
                pathtext::layout_on_shape(&run, shape, &viewport, &options, Some(&state))?;
            let Some(first) = result.placements.first() else {
                break;
            };
            println!(
                "  frame {frame}: offset {:.1}, first glyph at ({:.1}, {:.1})",
                state.offset(),
                first.position.x,
                first.position.y
            );
        }
    }

    Ok(())
}

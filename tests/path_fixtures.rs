use datatest_stable::Utf8Path;
use pathtext::Path;

const SAMPLES: u32 = 100;

fn check_path_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let parsed: Path = match source.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            let report = miette::Report::new(err);
            panic!("{path} failed to parse:\n{report:?}");
        }
    };

    let length = parsed.total_length();
    assert!(length > 0.0, "{path} has no drawable length");

    let bb = parsed.bounding_box();
    let tolerance = 1e-9 * bb.width().max(bb.height()).max(1.0);
    for i in 0..=SAMPLES {
        let fraction = f64::from(i) / f64::from(SAMPLES);
        let by_percent = parsed
            .point_at_percent(fraction)
            .unwrap_or_else(|| panic!("{path}: no point at {fraction}"));
        let by_distance = parsed
            .point_at_distance(fraction * length)
            .unwrap_or_else(|| panic!("{path}: no point at distance {}", fraction * length));
        assert_eq!(by_percent, by_distance, "{path} at {fraction}");
        assert!(
            bb.contains(by_percent.position, tolerance),
            "{path}: {:?} outside {bb:?}",
            by_percent.position
        );
        assert!(by_percent.tangent_angle.is_finite());
        assert!((by_percent.normal.length() - 1.0).abs() < 1e-9);
    }

    // Printing is absolute and lossless.
    let reprinted: Path = parsed.to_string().parse()?;
    assert_eq!(reprinted.segments(), parsed.segments(), "{path}");
    assert_eq!(reprinted.total_length(), length);

    Ok(())
}

datatest_stable::harness! {
    { test = check_path_file, root = "tests/paths", pattern = r"\.path$" },
}

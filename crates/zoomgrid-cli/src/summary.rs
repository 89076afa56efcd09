use std::path::Path;

use console::Style;
use zoomgrid_core::state::EditMode;
use zoomgrid_core::viewer::Viewer;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    viewer: &Viewer,
    base_path: &Path,
    overlay_path: Option<&Path>,
    output: &Path,
) {
    let s = Styles::new();
    let state = viewer.state();

    println!();
    println!("  {}", s.title.apply_to("Zoomgrid Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Base"),
        s.path.apply_to(base_path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    let (w, h) = viewer.base().dimensions();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Base size"),
        s.value.apply_to(format!("{}x{}", w, h))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{:.2}", state.zoom()))
    );
    if state.base_offset != (0, 0) {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Base offset"),
            s.value.apply_to(format!("{:?}", state.base_offset))
        );
    }
    let (dw, dh) = viewer.display_size();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Render size"),
        s.value.apply_to(format!("{}x{}", dw, dh))
    );
    println!();

    println!("  {}", s.header.apply_to("Overlay"));
    match (state.overlay.as_ref(), overlay_path) {
        (Some(overlay), Some(path)) => {
            println!(
                "    {:<12}{}",
                s.label.apply_to("File"),
                s.path.apply_to(path.display())
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Scale"),
                s.value.apply_to(format!("{:.2}", overlay.scale))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Offset"),
                s.value.apply_to(format!("{:?}", overlay.offset))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Opacity"),
                s.value.apply_to(overlay.opacity)
            );
            if state.edit_mode == EditMode::EditOverlay {
                println!(
                    "    {:<12}{}",
                    s.label.apply_to("Outline"),
                    s.value.apply_to("on")
                );
            }
        }
        _ => println!("    {}", s.disabled.apply_to("none")),
    }
    println!();

    println!("  {}", s.header.apply_to("Grid"));
    let grid = &state.grid;
    if grid.visible {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Interval"),
            s.value.apply_to(format!("{} px", grid.interval))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Offset"),
            s.value.apply_to(format!("{:?}", grid.offset))
        );
        if grid.rotation_deg != 0.0 {
            let center = match grid.rotation_center {
                Some((x, y)) => format!("({:.1}, {:.1})", x, y),
                None => "image centre".to_string(),
            };
            println!(
                "    {:<12}{}",
                s.label.apply_to("Rotation"),
                s.value.apply_to(format!("{:.1}\u{b0} about {}", grid.rotation_deg, center))
            );
        }
    } else {
        println!("    {}", s.disabled.apply_to("hidden"));
    }
    println!();
}

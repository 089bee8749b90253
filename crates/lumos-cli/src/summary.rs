use std::path::Path;

use console::Style;
use lumos_core::bitmap::ColorMode;
use lumos_core::denoise::{DenoiseFallbackWarning, DenoiseSelector};
use lumos_core::stats::{Stats, StatsDelta};
use lumos_core::ParameterSet;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    up: Style,
    down: Style,
    warning: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            up: Style::new().green(),
            down: Style::new().red(),
            warning: Style::new().yellow().bold(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_parameter_summary(
    input: &Path,
    output: &Path,
    mode: ColorMode,
    params: &ParameterSet,
) {
    let s = Styles::new();

    print_title(&s, "Lumos Enhance");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(mode)
    );
    println!();

    println!("  {}", s.header.apply_to("Resample"));
    if params.scale_factor == 1.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Scale"),
            s.disabled.apply_to("off")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Scale"),
            s.value.apply_to(format!("{}x", params.scale_factor))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Kernel"),
            s.method.apply_to(params.interpolation)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Tone"));
    print_multiplier(&s, "Brightness", params.brightness, true);
    print_multiplier(&s, "Contrast", params.contrast, true);
    print_multiplier(
        &s,
        "Saturation",
        params.saturation,
        mode != ColorMode::Gray,
    );
    println!();

    println!("  {}", s.header.apply_to("Detail"));
    if params.sharpness > 1.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Sharpness"),
            s.value.apply_to(params.sharpness)
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Sharpness"),
            s.disabled.apply_to("off")
        );
    }
    if params.noise_reduction > 0.0 {
        let strategy = DenoiseSelector::default()
            .select(params.noise_reduction)
            .map(|tier| tier.strategy.to_string())
            .unwrap_or_default();
        println!(
            "    {:<12}{} {}",
            s.label.apply_to("Denoise"),
            s.value.apply_to(params.noise_reduction),
            s.method.apply_to(format!("({strategy})"))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Denoise"),
            s.disabled.apply_to("off")
        );
    }
    println!();
}

fn print_multiplier(s: &Styles, label: &str, value: f32, applicable: bool) {
    if !applicable {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.disabled.apply_to("n/a")
        );
    } else if value == 1.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.disabled.apply_to("unchanged")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.value.apply_to(format!("x{value}"))
        );
    }
}

pub fn print_stats(path: &Path, mode: ColorMode, stats: &Stats) {
    let s = Styles::new();

    print_title(&s, "Image Statistics");

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", stats.width, stats.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(format!("{mode} ({} channels)", stats.channels))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{:.2} MB", stats.byte_size_mb()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mean"),
        s.value.apply_to(format!("{:.2}", stats.mean_brightness))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Std dev"),
        s.value.apply_to(format!("{:.2}", stats.std_brightness))
    );
    println!();
}

pub fn print_stats_comparison(before: &Stats, after: &Stats) {
    let s = Styles::new();
    let delta = StatsDelta::between(before, after);

    println!();
    println!("  {}", s.header.apply_to("Before / After"));
    println!(
        "    {:<12}{:>14}{:>14}{:>14}",
        s.label.apply_to(""),
        s.label.apply_to("original"),
        s.label.apply_to("enhanced"),
        s.label.apply_to("change")
    );

    let size = |st: &Stats| format!("{}x{}", st.width, st.height);
    println!(
        "    {:<12}{:>14}{:>14}{:>14}",
        s.label.apply_to("Dimensions"),
        size(before),
        size(after),
        s.value.apply_to(format!("x{:.2} px", delta.pixel_ratio))
    );
    println!(
        "    {:<12}{:>14}{:>14}{}",
        s.label.apply_to("Size"),
        format!("{:.2} MB", before.byte_size_mb()),
        format!("{:.2} MB", after.byte_size_mb()),
        signed(&s, delta.byte_size as f64 / (1024.0 * 1024.0), " MB")
    );
    println!(
        "    {:<12}{:>14.2}{:>14.2}{}",
        s.label.apply_to("Mean"),
        before.mean_brightness,
        after.mean_brightness,
        signed(&s, delta.mean_brightness, "")
    );
    println!(
        "    {:<12}{:>14.2}{:>14.2}{}",
        s.label.apply_to("Std dev"),
        before.std_brightness,
        after.std_brightness,
        signed(&s, delta.std_brightness, "")
    );
    println!();
}

fn signed(s: &Styles, value: f64, unit: &str) -> String {
    let text = format!("{:>14}", format!("{value:+.2}{unit}"));
    if value > 0.0 {
        s.up.apply_to(text).to_string()
    } else if value < 0.0 {
        s.down.apply_to(text).to_string()
    } else {
        s.label.apply_to(text).to_string()
    }
}

pub fn print_warnings(warnings: &[DenoiseFallbackWarning]) {
    if warnings.is_empty() {
        return;
    }
    let s = Styles::new();
    for warning in warnings {
        println!("  {} {}", s.warning.apply_to("warning:"), warning);
    }
    println!();
}

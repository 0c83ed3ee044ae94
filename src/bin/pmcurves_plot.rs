use plotpy::{linspace, Curve, Plot};
use pmcurves::{Samples, StrError};
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmcurves_plot",
    about = "Plots the Dynamic-Wa capillary pressure and relative permeability curves"
)]
struct Options {
    /// Directory where the figure is saved
    #[structopt(long, default_value = "/tmp/pmcurves")]
    out_dir: String,

    /// Values of the dynamic coefficient Wa (comma separated)
    #[structopt(long, use_delimiter = true, default_value = "0.0,0.5,2.0")]
    wa: Vec<f64>,

    /// Number of points per curve
    #[structopt(long, default_value = "201")]
    np: usize,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // the sample medium with the default regularization threshold
    let model = Samples::regularized_dynamic_wa_params().finalize();

    // sample slightly beyond [0, 1] to show the regularized extrapolations
    let ss = linspace(-0.05, 1.05, options.np);

    // capillary pressure curves
    let mut plot = Plot::new();
    plot.set_gaps(0.25, 0.0)
        .set_subplot(1, 2, 1)
        .set_title("Capillary pressure");
    for wa in &options.wa {
        let pp: Vec<_> = ss.iter().map(|sw| model.calc_pcnw_sat(*sw, *wa)).collect();
        let mut curve = Curve::new();
        curve.set_label(&format!("$W_a$ = {}", wa));
        curve.draw(&ss, &pp);
        plot.add(&curve);
    }
    plot.grid_labels_legend("$S_w$", "$p_c$ [Pa]");

    // relative permeability curves
    plot.set_subplot(1, 2, 2).set_title("Relative permeabilities");
    for wa in &options.wa {
        let ww: Vec<_> = ss.iter().map(|sw| model.calc_krw_sat(*sw, *wa)).collect();
        let nn: Vec<_> = ss.iter().map(|sw| model.calc_krn_sat(*sw, *wa)).collect();
        let mut curve_w = Curve::new();
        curve_w.set_label(&format!("$k_{{rw}}$, $W_a$ = {}", wa));
        curve_w.draw(&ss, &ww);
        plot.add(&curve_w);
        let mut curve_n = Curve::new();
        curve_n.set_label(&format!("$k_{{rn}}$, $W_a$ = {}", wa));
        curve_n.set_line_style("--");
        curve_n.draw(&ss, &nn);
        plot.add(&curve_n);
    }
    plot.grid_labels_legend("$S_w$", "$k_r$");

    // save figure
    let path = format!("{}/dynamic_wa_curves.svg", options.out_dir);
    plot.set_figure_size_points(800.0, 300.0).save(&path)?;

    // message
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n\n{}", thin_line);
    println!("figure saved in:");
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}

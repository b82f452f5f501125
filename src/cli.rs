use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which representation the parameters of `describe` are given in.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FormKind {
    /// ax^2 + bx + c
    #[clap(alias = "polynomial")]
    Poly,
    /// a(x - d)^2 + e
    Vertex,
    /// a(x - x1)(x - x2)
    Factored,
}

#[derive(Debug, Parser)]
#[command(
    name = "quadlab",
    about = "quadlab — interactive lessons on quadratic functions and equations",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuadlabCli {
    /// Global: path to config (TOML); default: ~/.quadlab/quadlab.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a x^2 + b x + c = target (target defaults to 0)
    ///
    /// Examples:
    ///   quadlab solve 1 -5 6
    ///   quadlab solve 1 -4 5 --target 1
    Solve {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        #[arg(allow_hyphen_values = true)]
        c: f64,

        /// Right-hand side of the equation
        #[arg(
            long = "target",
            short = 't',
            default_value_t = 0.0,
            allow_hyphen_values = true
        )]
        target: f64,
    },

    /// Show every property and representation of one quadratic
    ///
    /// Examples:
    ///   quadlab describe poly 2 -8 5
    ///   quadlab describe factored 2 1 -3
    Describe {
        /// Representation the three parameters are given in
        #[arg(value_enum)]
        form: FormKind,

        /// a, then (b, c) / (d, e) / (x1, x2) depending on the form
        #[arg(allow_hyphen_values = true)]
        p1: f64,
        #[arg(allow_hyphen_values = true)]
        p2: f64,
        #[arg(allow_hyphen_values = true)]
        p3: f64,
    },

    /// Print sampled (x, f(x)) pairs as TSV for external plotting
    Sample {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        #[arg(allow_hyphen_values = true)]
        c: f64,

        /// Left edge of the sample window (default from config)
        #[arg(long = "from", value_name = "X", allow_hyphen_values = true)]
        from: Option<f64>,

        /// Right edge of the sample window (default from config)
        #[arg(long = "to", value_name = "X", allow_hyphen_values = true)]
        to: Option<f64>,

        /// Number of sample points
        #[arg(long = "points", value_name = "N")]
        points: Option<usize>,
    },

    /// Randomized question-and-answer drill on stdin/stdout
    Practice {
        /// How many questions to ask
        #[arg(long = "count", short = 'n', default_value_t = 5)]
        count: usize,
    },

    /// Open the interactive lesson browser, optionally at one lesson
    Learn {
        /// Lesson slug (three-forms, graphical, root-extraction)
        lesson: Option<String>,
    },
}

use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail};
    use clap::{Parser, Subcommand};
    use transform_math::{
        Matrix4, Vector4,
        consts::{MATRIX_LEN, VECTOR_LEN},
        readout::{Readout, ReadoutInputs},
    };

    #[derive(Debug, Parser)]
    #[command(about = "Homogeneous vector and matrix calculator", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the result of every vector and matrix operation for two vectors
        /// and two matrices
        Readout {
            /// Vector A as four comma-separated components (default 1,0,0,0)
            #[arg(long, allow_hyphen_values = true)]
            vector_a: Option<String>,

            /// Vector B as four comma-separated components (default 0,1,0,0)
            #[arg(long, allow_hyphen_values = true)]
            vector_b: Option<String>,

            /// Matrix A as sixteen comma-separated elements in column-major
            /// order (default identity)
            #[arg(long, allow_hyphen_values = true)]
            matrix_a: Option<String>,

            /// Matrix B as sixteen comma-separated elements in column-major
            /// order (default identity)
            #[arg(long, allow_hyphen_values = true)]
            matrix_b: Option<String>,

            /// Number of decimals to print
            #[arg(short, long, default_value_t = 3)]
            precision: usize,
        },
        /// Multiply a vector by a matrix
        Transform {
            /// Sixteen comma-separated elements in column-major order
            #[arg(short, long, allow_hyphen_values = true)]
            matrix: String,

            /// Four comma-separated components
            #[arg(short, long, allow_hyphen_values = true)]
            vector: String,

            /// Number of decimals to print
            #[arg(short, long, default_value_t = 3)]
            precision: usize,
        },
    }

    pub fn main() -> Result<()> {
        init_logging()?;

        let cli = Cli::parse();

        match cli.command {
            Command::Readout {
                vector_a,
                vector_b,
                matrix_a,
                matrix_b,
                precision,
            } => {
                let defaults = ReadoutInputs::default();
                let inputs = ReadoutInputs::new(
                    parse_optional(vector_a.as_deref(), parse_vector, defaults.vector_a)
                        .context("Invalid vector A")?,
                    parse_optional(vector_b.as_deref(), parse_vector, defaults.vector_b)
                        .context("Invalid vector B")?,
                    parse_optional(matrix_a.as_deref(), parse_matrix, defaults.matrix_a)
                        .context("Invalid matrix A")?,
                    parse_optional(matrix_b.as_deref(), parse_matrix, defaults.matrix_b)
                        .context("Invalid matrix B")?,
                );
                log::debug!("Evaluating readout for {inputs:?}");

                let readout = Readout::evaluate(&inputs);
                for label in readout.invalid_entries() {
                    log::warn!("{label} has NaN components");
                }
                println!("{readout:.precision$}");
            }
            Command::Transform {
                matrix,
                vector,
                precision,
            } => {
                let matrix = parse_matrix(&matrix).context("Invalid matrix")?;
                let vector = parse_vector(&vector).context("Invalid vector")?;
                log::debug!("Transforming {vector:?} by {matrix:?}");

                println!("{:.precision$}", matrix * vector);
            }
        }
        Ok(())
    }

    fn init_logging() -> Result<()> {
        env_logger::init();
        Ok(())
    }

    fn parse_optional<T>(
        text: Option<&str>,
        parse: fn(&str) -> Result<T>,
        default: T,
    ) -> Result<T> {
        text.map_or(Ok(default), parse)
    }

    fn parse_values(text: &str) -> Result<Vec<f32>> {
        text.split(',')
            .map(|value| {
                let value = value.trim();
                value
                    .parse::<f32>()
                    .with_context(|| format!("Could not parse `{value}` as a number"))
            })
            .collect()
    }

    pub(super) fn parse_vector(text: &str) -> Result<Vector4> {
        let values = parse_values(text)?;
        if values.len() != VECTOR_LEN {
            bail!(
                "Expected {VECTOR_LEN} components, got {}",
                values.len()
            );
        }
        Ok(Vector4::from_slice(&values)?)
    }

    pub(super) fn parse_matrix(text: &str) -> Result<Matrix4> {
        let values = parse_values(text)?;
        if values.len() > MATRIX_LEN {
            bail!("Expected {MATRIX_LEN} elements, got {}", values.len());
        }
        Ok(Matrix4::from_column_major_slice(&values)?)
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}

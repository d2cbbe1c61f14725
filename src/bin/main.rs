use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};

use jvm_descriptor::logging::SimpleLogger;
use jvm_descriptor::{FieldDescriptorBuilder, JvmDescriptor, MethodDescriptorBuilder};

/// Renders JVM field and method descriptors from Java type names
#[derive(Parser, Debug)]
#[command(name = "jvm-descriptor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a field descriptor
    Field {
        /// Type of the field, e.g. `int`, `java.lang.String` or `double[][]`
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Use the wrapper class if TYPE is a primitive
        #[arg(long)]
        boxed: bool,
        /// Number of array dimensions to wrap TYPE in
        #[arg(long, default_value_t = 0)]
        dims: usize,
    },
    /// Render a method descriptor
    Method {
        /// Parameter type; repeat for each parameter, in order
        #[arg(long = "param", value_name = "TYPE")]
        params: Vec<String>,
        /// Return type; the method returns `void` if omitted
        #[arg(long, value_name = "TYPE")]
        returns: Option<String>,
        /// Use wrapper classes for primitive parameter and return types
        #[arg(long)]
        boxed: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn run(command: Command) -> jvm_descriptor::Result<String> {
    match command {
        Command::Field { type_name, boxed, dims } => {
            let descriptor = FieldDescriptorBuilder::for_type(&type_name, boxed)?
                .increase_array_dim(dims)?
                .build()?;
            Ok(descriptor.to_descriptor_string())
        },
        Command::Method { params, returns, boxed } => {
            let mut builder = MethodDescriptorBuilder::new();
            for param in &params {
                builder = builder.add_parameter(param, boxed)?;
            }
            builder = match returns {
                Some(ref ret) => builder.set_return_type(ret, boxed)?,
                None => builder.set_void_return_type(),
            };
            Ok(builder.build().to_descriptor_string())
        },
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = SimpleLogger::init(cli.log_level.into()) {
        eprintln!("failed to install logger: {}", e);
    }

    match run(cli.command) {
        Ok(descriptor) => println!("{}", descriptor),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        },
    }
}

//! A CLI tool for inspecting the DICOM transfer syntaxes
//! known to the registry.
use clap::Parser;
use dicom_xfer_core::VR;
use dicom_xfer_registry::{TransferSyntax, TransferSyntaxId, TransferSyntaxRegistry};
use snafu::{Report, ResultExt, Whatever};
use tracing::{debug, error, Level};

/// Show the encoding properties of DICOM transfer syntaxes
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Transfer syntax UIDs, keywords or names to describe
    transfer_syntax: Vec<String>,

    /// List all known transfer syntaxes
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Include retired transfer syntaxes in the listing
    #[arg(long = "retired", requires = "list")]
    retired: bool,

    /// Also print the size of a data element header with this VR
    #[arg(long = "vr")]
    vr: Option<VR>,

    /// Print more information while running
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        transfer_syntax,
        list,
        retired,
        vr,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    if list {
        print_listing(retired);
    }

    let mut failed = false;
    for arg in &transfer_syntax {
        match resolve(arg) {
            Ok(ts) => print_properties(&ts, vr),
            Err(e) => {
                error!("{}", Report::from_error(e));
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(-2);
    }
}

fn resolve(arg: &str) -> Result<TransferSyntax, Whatever> {
    let id: TransferSyntaxId = arg
        .strip_suffix('\0')
        .unwrap_or(arg)
        .parse()
        .with_whatever_context(|_| format!("Could not resolve `{}`", arg))?;
    debug!("`{}` resolved to {:?}", arg, id);
    Ok(TransferSyntax::new(id))
}

fn print_listing(retired: bool) {
    for ts in TransferSyntaxRegistry
        .iter()
        .filter(|ts| retired || !ts.is_retired())
    {
        println!("{}  {}  {}", ts.uid(), ts.keyword(), ts.name());
    }
}

fn print_properties(ts: &TransferSyntax, vr: Option<VR>) {
    println!("{}", ts.name());
    println!("  UID:                   {}", ts.uid());
    println!("  Keyword:               {}", ts.keyword());
    println!("  Byte order:            {}", ts.byte_order());
    println!("  Pixel data byte order: {}", ts.pixel_data_byte_order());
    println!("  VR encoding:           {:?}", ts.vr_encoding());
    println!("  Encapsulation:         {:?}", ts.encapsulation());
    println!("  Lossy:                 {}", ts.is_lossy());
    println!("  Retired:               {}", ts.is_retired());
    println!("  Stream compression:    {:?}", ts.stream_compression());
    println!("  Referenced:            {}", ts.is_referenced());
    println!("  Fragmentable:          {}", ts.is_fragmentable());
    if ts.jpeg_process_8bit() != 0 {
        println!(
            "  JPEG process:          {} (8-bit), {} (12-bit)",
            ts.jpeg_process_8bit(),
            ts.jpeg_process_12bit()
        );
    }
    if let Some(vr) = vr {
        let label = format!("{} header size:", vr);
        let size = format!("{} bytes", ts.tag_header_size(vr));
        println!("{}", property_row(&label, size));
    }
}

fn property_row(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<23}{}", label, value)
}

#[cfg(test)]
mod tests {
    use super::{property_row, resolve, App};
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    #[test]
    fn resolves_uids_and_keywords() {
        let ts = resolve("1.2.840.10008.1.2.1").unwrap();
        assert_eq!(ts.keyword(), "ExplicitVRLittleEndian");
        let ts = resolve("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts.keyword(), "ExplicitVRLittleEndian");
        let ts = resolve("RLELossless").unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.5");
        let ts = resolve("Explicit VR Big Endian").unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.2");
        assert!(resolve("1.2.3.4").is_err());
    }

    #[test]
    fn strips_a_single_padding_null() {
        assert!(resolve("1.2.840.10008.1.2\0").is_ok());
        assert!(resolve("1.2.840.10008.1.2\0\0").is_err());
        assert!(resolve("\0").is_err());
    }

    #[test]
    fn header_size_row_lines_up() {
        let uid_row = format!("  UID:                   {}", "1.2.840.10008.1.2");
        let row = property_row("OB header size:", "12 bytes");
        assert_eq!(row, "  OB header size:        12 bytes");
        assert_eq!(row.find("12"), uid_row.find("1.2"));
    }
}

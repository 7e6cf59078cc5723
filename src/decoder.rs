use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;

use log::{debug, error, info};

use huffman_text_coding::{CodingError, HuffmanCoder};

fn read_bits_from_file(filepath: &str) -> std::io::Result<String> {
    info!("Reading encoded file: {}", filepath);
    let content = fs::read_to_string(filepath)?;
    debug!("Total file size: {} bytes", content.len());

    Ok(content.trim().to_owned())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        error!("Usage: {} <source_file> <bits_file> <output_file>", args[0]);
        eprintln!("  📂 <source_file>: text the code was built from.");
        eprintln!("  📂 <bits_file>:   '0'/'1' string produced by encode.");
        eprintln!("  💾 <output_file>: path to write the decoded output.");
        process::exit(1);
    }

    let source_filepath = &args[1];
    let bits_filepath = &args[2];
    let output_filepath = &args[3];

    info!("--- Start Decoding ---");

    let coder = match File::open(source_filepath)
        .map_err(CodingError::from)
        .and_then(|f| HuffmanCoder::from_source(BufReader::new(f)))
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to rebuild code from {}: {}", source_filepath, e);
            process::exit(1);
        }
    };

    let bits = match read_bits_from_file(bits_filepath) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read encoded file: {}", e);
            process::exit(1);
        }
    };

    let decoded = match coder.decode(&bits) {
        Ok(d) => d,
        Err(e) => {
            error!("Could not decode {}: {}", bits_filepath, e);
            process::exit(1);
        }
    };

    info!("Writing decoded output to file: {}", output_filepath);
    if let Err(e) = fs::write(output_filepath, &decoded) {
        error!("Could not write decoded data: {}", e);
        process::exit(1);
    }

    println!(
        "\r\n✅ decoding successful.\n\
         📂 input file:  {} ({} bits)\n\
         💾 output file: {} ({} bytes)",
        bits_filepath,
        bits.len(),
        output_filepath,
        decoded.len()
    );

    info!("--- End ---");
}

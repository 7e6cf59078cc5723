use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;

use log::{debug, error, info};

use huffman_text_coding::huffman::{average_code_length, entropy_from_freq};
use huffman_text_coding::{CodingError, HuffmanCoder};

fn open_source(filepath: &str) -> Result<BufReader<File>, CodingError> {
    info!("Reading source text: {}", filepath);
    Ok(BufReader::new(File::open(filepath)?))
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        error!("Usage: {} <source_file> [output_file]", args[0]);
        eprintln!("  📂 <source_file>: text to build the code from and encode.");
        eprintln!("  💾 [output_file]: where to write the bit string (default 'output.bits').");
        process::exit(1);
    }

    let input_filepath = &args[1];
    let output_filepath = args.get(2).map_or("output.bits", |s| s.as_str());

    info!("--- Start Encoding ---");

    let coder = match open_source(input_filepath).and_then(HuffmanCoder::from_source) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build code from {}: {}", input_filepath, e);
            process::exit(1);
        }
    };
    debug!("Alphabet size: {}", coder.alphabet_len());

    let encoded = match open_source(input_filepath).and_then(|src| coder.encode(src)) {
        Ok(bits) => bits,
        Err(e) => {
            error!("Failed to encode {}: {}", input_filepath, e);
            process::exit(1);
        }
    };

    info!("Writing bit string to file: {}", output_filepath);
    if let Err(e) = fs::write(output_filepath, &encoded) {
        error!("Could not write encoded data: {}", e);
        process::exit(1);
    }

    let original_len: u64 = coder.frequencies().values().sum();
    let file_entropy = entropy_from_freq(coder.frequencies());
    let avg_len = average_code_length(coder.frequencies(), coder.code_table());
    let ratio = if original_len > 0 {
        100.0 * (1.0 - (encoded.len() as f64) / (original_len as f64 * 8.0))
    } else {
        0.0
    };

    println!(
        "\r\n✅ Encoding successful.\n\
         📂  Input:       {} ({} symbols)\n\
         💾  Output:      {} ({} bits)\n\
         ℹ️  Entropy:     {:.4} bits/symbol\n\
         📏  Avg. code:   {:.4} bits/symbol\n\
         🗜️  Ratio:       {:.4}% (vs. 8 bits/symbol)",
        input_filepath,
        original_len,
        output_filepath,
        encoded.len(),
        file_entropy,
        avg_len,
        ratio
    );

    info!("--- End ---");
}

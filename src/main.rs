use std::env;
use std::fmt::Write;
use std::fs::File;

use cx::collections::contiguous::{DynArray, StringBuilder};
use cx::log::LogLevel;
use cx::process::{self, Args};
use cx::{fatal, fatalc, log, logc, logfile, swap};

fn main() {
    log!(LogLevel::Info, "Some useful info..");

    let path = env::temp_dir().join("cx-demo.log");
    let mut file = File::create(&path)
        .unwrap_or_else(|_| fatal!(1, "Could not open file: {}", process::last_os_error()));
    logfile!(file, LogLevel::Warn, "the file name is {}", path.display());
    drop(file);
    logc!(LogLevel::Error, "Something went wrong Error: {}", 420);

    let mut words = DynArray::new();
    words.append("foo");
    words.append("bar");
    words.append("baz");
    for (index, word) in words.for_each_indexed() {
        println!("{index}: {word}");
    }
    words.free();

    let mut sb = StringBuilder::new();
    sb.append("foo");
    sb.append(" ");
    sb.append("bar");
    let _ = write!(sb, " ({} bytes)", 7);
    println!("{sb}");
    sb.free();

    let mut a = 10;
    let mut b = 20;
    swap!(a, b);
    println!("a = {a}, b = {b}");

    let mut args = Args::from_env();
    if args.count() > 1 {
        if let Some(program) = args.shift() {
            println!("{program}");
        }
        println!("{}", args.as_slice()[0]);
    } else {
        fatalc!(1, "No argument provided.");
    }
}

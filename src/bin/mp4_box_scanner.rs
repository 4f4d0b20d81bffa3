use mediaduration::{
    BoxScanner, FourCC, LocalSeekableStream, MediaDurationResult, MovieTiming, ScanLimits,
    SeekableStream,
};
use std::env;
use std::io::{Seek, SeekFrom};
use std::process;

fn main() {
    println!("🔍 MP4 Box Scanner");
    println!("==================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: mp4_box_scanner <file.mp4>");
        process::exit(2);
    }
    let file_path = &args[1];

    match scan_mp4_structure(file_path) {
        Ok(timing) => {
            println!();
            println!(
                "⏱️  mvhd v{}: {} ticks @ {}/s = {:?}",
                timing.version, timing.ticks, timing.timescale, timing.duration
            );
        }
        Err(e) => {
            println!("\n❌ Scan failed: {}", e);
            process::exit(1);
        }
    }
}

fn scan_mp4_structure(path: &str) -> MediaDurationResult<MovieTiming> {
    let mut file = LocalSeekableStream::open(path)?;
    let file_size = file.seek(SeekFrom::End(0))?;
    file.seek(SeekFrom::Start(0))?;

    println!("📄 File: {}", path);
    println!("📏 Size: {} bytes", file_size);
    println!();

    let mut scanner = BoxScanner::new(&mut file, ScanLimits::default())?;
    scan_boxes(&mut scanner)?;

    // Second pass through the library entry point, so the tool reports
    // exactly what an upload would get
    file.seek(SeekFrom::Start(0))?;
    mediaduration::movie_header_from_reader(&mut file)
        .and_then(|header| Ok(MovieTiming::try_from(&header)?))
}

fn scan_boxes<S: SeekableStream>(scanner: &mut BoxScanner<'_, S>) -> MediaDurationResult<()> {
    loop {
        let indent = "  ".repeat(scanner.depth());
        let header = match scanner.next_box() {
            Ok(Some(header)) => header,
            Ok(None) => break,
            Err(e) if e.is_container() => {
                // Rest of this level is unreadable; the parent carries on
                println!("{}⚠️  Invalid box structure: {}", indent, e);
                break;
            }
            Err(e) => return Err(e),
        };
        println!(
            "{}📦 {} [size: {}, pos: {}-{}]",
            indent,
            header.box_type,
            header.size,
            header.offset,
            header.offset + header.size
        );
        if is_container_box(header.box_type) {
            match scanner.descend(|child| scan_boxes(child)) {
                Ok(()) => {}
                Err(e) if e.is_container() => {
                    println!("{}⚠️  Not descending into {}: {}", indent, header.box_type, e);
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

fn is_container_box(box_type: FourCC) -> bool {
    matches!(
        box_type.as_bytes(),
        b"moov" | b"trak" | b"mdia" | b"minf" | b"stbl" | b"edts" | b"dinf" | b"udta" | b"mvex"
            | b"moof" | b"traf"
    )
}

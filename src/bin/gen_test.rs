//! Synthetic WhatsApp export generator for benchmarking and stress testing.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [locale]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt tr

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "👍🏽", "❤️", "🎉", "🏳️‍🌈", "🇹🇷",
    "🇺🇸", "👨‍👩‍👧‍👦", "🤷‍♀️", "1️⃣",
];

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Ayşe Yılmaz",
    "Mehmet",
    "Иван",
    "村上",
    "Dr. Who: Time Lord",
    "🔥FireUser🔥",
    "+90 555 123 45 67",
];

const WORDS: &[&str] = &[
    "hello", "merhaba", "tomorrow", "yarın", "meeting", "toplantı", "coffee", "kahve", "really",
    "gerçekten", "thanks", "teşekkürler", "what", "nasılsın", "okay", "tamam", "günaydın",
    "weekend", "hafta", "sonu", "lol", "haha", "ok",
];

const ENGLISH_MEDIA: &[&str] = &[
    "\u{200E}image omitted",
    "\u{200E}video omitted",
    "\u{200E}audio omitted",
    "\u{200E}sticker omitted",
    "\u{200E}GIF omitted",
    "\u{200E}document omitted",
    "\u{200E}Missed voice call",
    "\u{200E}Video call. Tap to call back",
    "Location: https://maps.google.com/?q=41.0082,28.9784",
];

const TURKISH_MEDIA: &[&str] = &[
    "\u{200E}görüntü dahil edilmedi",
    "\u{200E}video dahil edilmedi",
    "\u{200E}ses dahil edilmedi",
    "\u{200E}Çıkartma dahil edilmedi",
    "\u{200E}belge dahil edilmedi",
    "\u{200E}Cevapsız sesli arama.",
    "\u{200E}Görüntülü arama. Başka bir cihazda cevaplandı",
    "Konum: https://maps.google.com/?q=41.0082,28.9784",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let locale = args.get(3).map_or("en", String::as_str);

    let (media, edited) = match locale {
        "en" | "english" => (ENGLISH_MEDIA, "<This message was edited>"),
        "tr" | "turkish" => (TURKISH_MEDIA, "<Bu mesaj düzenlendi>"),
        _ => {
            eprintln!("Unknown locale: {locale}. Use 'en' or 'tr'");
            std::process::exit(1);
        }
    };

    println!("🧪 Chat Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Locale:   {locale}");
    println!();

    let mut writer = BufWriter::with_capacity(1024 * 1024, File::create(output)?);
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    // Preamble lines appear before the first header and are dropped as orphans
    writeln!(
        writer,
        "\u{200E}Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
    )?;

    for i in 0..count {
        let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Alice");
        let header = timestamp(i);

        let line = match rng.gen_range(0..100) {
            0..=11 => format!("\u{200E}{header} {author}: {}\n", pick(&mut rng, media)),
            12..=13 => format!("{header} {author}: \u{200E}{edited}\n"),
            14..=23 => format!(
                "{header} {author}: {}\n{}\n{}\n",
                sentence(&mut rng),
                sentence(&mut rng),
                sentence(&mut rng)
            ),
            24..=29 => format!(
                "{header} {author}: {} https://example.com/{i}\n",
                sentence(&mut rng)
            ),
            _ => format!("{header} {author}: {}\n", sentence(&mut rng)),
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// Header timestamp for the `i`th message: roughly four messages a day,
/// alternating between the comma and no-comma layouts.
fn timestamp(i: usize) -> String {
    let day_index = i / 4;
    let day = (day_index % 28) + 1;
    let month = ((day_index / 28) % 12) + 1;
    let year = 2022 + day_index / (28 * 12);
    let hour = (i * 7) % 24;
    let minute = (i * 13) % 60;
    let second = (i * 17) % 60;
    let separator = if i % 5 == 0 { "" } else { "," };
    format!("[{day:02}.{month:02}.{year}{separator} {hour:02}:{minute:02}:{second:02}]")
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..12);
    let mut words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    if rng.gen_bool(0.3) {
        words.push(pick(rng, EMOJIS));
    }
    words.join(" ")
}

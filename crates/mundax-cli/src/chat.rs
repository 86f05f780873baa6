use anyhow::Result;
use mundax_core::{AiBridge, ApiKeys, FarmRecord, QueryContext, RecordStore, Settings};
use std::io::{self, BufRead, Write};

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The chat sink: one tagged message appended to the log.
fn append(tag: &str, text: &str) {
    println!("\n[{tag}] {text}\n");
}

fn print_help() {
    println!("Commands:");
    println!("  /record add        add a farm plot record");
    println!("  /record list       show saved records");
    println!("  /record del <n>    delete record n");
    println!("  /record clear      delete all records");
    println!("  /record export     print records as JSON");
    println!("  /lang <tag>        set language (en, sn)");
    println!("  /season <name>     set season (rainy, dry)");
    println!("  /quit              exit");
}

fn add_record(store: &RecordStore) -> Result<()> {
    let plot = read_line("Plot name: ")?;
    let crop = read_line("Crop: ")?;
    let variety = read_line("Variety: ")?;
    let area_ha: f64 = read_line("Area (ha): ")?.parse().unwrap_or(0.0);
    let soil_type = read_line("Soil type: ")?;
    let plant_date = read_line("Planting date: ")?;

    store.add(FarmRecord {
        plot,
        crop,
        variety,
        area_ha,
        soil_type,
        plant_date,
    })?;
    println!("Record saved.");
    Ok(())
}

fn handle_record(store: &RecordStore, args: &str) -> Result<()> {
    let mut parts = args.split_whitespace();
    match parts.next() {
        Some("add") => add_record(store)?,
        Some("list") => {
            let records = store.load()?;
            if records.is_empty() {
                println!("No records yet.");
            }
            for (i, r) in records.iter().enumerate() {
                println!(
                    "{}: {} | {} ({}) | {}ha | {} soil | planted {}",
                    i, r.plot, r.crop, r.variety, r.area_ha, r.soil_type, r.plant_date
                );
            }
        }
        Some("del") => {
            let index: usize = parts.next().unwrap_or("").parse().unwrap_or(usize::MAX);
            if store.delete(index)? {
                println!("Record {index} deleted.");
            } else {
                println!("No record at index {index}.");
            }
        }
        Some("clear") => {
            store.clear()?;
            println!("All records deleted.");
        }
        Some("export") => println!("{}", store.export()?),
        _ => println!("Usage: /record add|list|del <n>|clear|export"),
    }
    Ok(())
}

pub async fn run(keys: ApiKeys) -> Result<()> {
    let bridge = AiBridge::new(&keys);
    let store = RecordStore::default();
    let mut settings = Settings::load()?;

    println!("MundaX farming assistant. Type /help for commands.");

    loop {
        let line = read_line("> ")?;
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('/') {
            let (cmd, args) = rest.split_once(' ').unwrap_or((rest, ""));
            match cmd {
                "quit" | "exit" => break,
                "help" => print_help(),
                "record" => handle_record(&store, args)?,
                "lang" => {
                    if args.is_empty() {
                        println!("Current language: {}", settings.lang);
                    } else {
                        settings.lang = args.to_string();
                        settings.save()?;
                        println!("Language set to {}.", settings.lang);
                    }
                }
                "season" => {
                    if args.is_empty() {
                        println!("Current season: {}", settings.season);
                    } else {
                        settings.season = args.to_string();
                        settings.save()?;
                        println!("Season set to {}.", settings.season);
                    }
                }
                other => println!("Unknown command: /{other}"),
            }
            continue;
        }

        append("you", &line);
        let records = store.load().unwrap_or_default();
        let ctx = QueryContext::new(settings.lang.clone(), settings.season.clone())
            .with_records(records);
        let reply = bridge.dispatch(&line, &ctx).await;
        append("mundax", &reply);
    }

    Ok(())
}

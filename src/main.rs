use clap::Parser;
use colored::Colorize;
use library_catalog::{
    Book, BookInput, CirculationEvent, CirculationLogger, Library, Result, Shelf, ShelfInput,
    StockWatcher,
};

/// Command-line arguments for the catalog demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the sample library
    #[arg(short, long, default_value = "Bellevue Public Library")]
    library: String,

    /// Print the final catalog as JSON instead of the text table
    #[arg(long)]
    json: bool,

    /// Log every catalog mutation, not just circulation
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("{}", "Library Catalog Demonstration".green().bold());
    println!("=====================================\n");

    match run(&args) {
        Ok(()) => println!("\n{}", "Demonstration complete!".green().bold()),
        Err(e) => eprintln!("{} {e}", "Error:".red().bold()),
    }
}

/// Build the sample library, circulate a few copies and print the catalog
fn run(args: &Args) -> Result<()> {
    let mut library = Library::new(args.library.as_str());
    library.register_observer(Box::new(CirculationLogger));
    library.register_observer(Box::new(StockWatcher));

    // Shelves can be built on their own or created from a plain name
    let outcomes = library.add_shelves([
        ShelfInput::from(Shelf::new("Fantasy")),
        Shelf::new("Science Fiction").into(),
        "Boring Adult Stuff".into(),
        "Fantasy".into(),
    ]);
    outcomes.into_iter().for_each(report);

    let thrones = Book::with_copies("A Game of Thrones", 2)?
        .with_author("George R. R. Martin")
        .with_page_count(864)
        .with_description(
            "Here is the first volume in George R. R. Martin's cycle of novels that \
             includes A Clash of Kings and A Storm of Swords.",
        );
    let rings = Book::new("The Lord of the Rings");
    let outcomes =
        library.add_books_to("Fantasy", [BookInput::from(thrones), rings.into(), "the scar".into()])?;
    outcomes.into_iter().for_each(report);

    // Metadata can be filled in once a book is on the shelf
    let mut fantasy = library.get_shelf_mut("Fantasy")?;
    let mut scar = fantasy.get_book_mut("The Scar")?;
    scar.set_author("China Mieville");
    scar.set_page_count(608);
    scar.set_description(
        "In the third book in an astounding, genre-breaking run, China Mieville expands the \
         horizon beyond the boundaries of New Crobuzon, setting sail on the high seas of his \
         ever-growing world of Bas Lag.",
    );
    println!("{}\n", library.get_shelf("Fantasy")?.get_book("The Scar")?);

    report(library.check_out("Fantasy", "A Game of Thrones"));
    report(library.check_out("Fantasy", "The Lord of the Rings"));
    report(library.check_out("Fantasy", "The Lord of the Rings"));
    report(library.check_in("Fantasy", "The Lord of the Rings"));
    report(library.check_in("Fantasy", "The Lord of the Rings"));
    report(library.check_out("Westerns", "Lonesome Dove"));

    // Shelving a title that is already there adds a copy
    library.add_books_to("Fantasy", ["The Scar"])?.into_iter().for_each(report);

    println!();
    if args.json {
        match serde_json::to_string_pretty(&library.catalog()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{} {e}", "Cannot render catalog:".red().bold()),
        }
    } else {
        for line in library.report_all_books() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Print the outcome of a non-fatal catalog operation
fn report<T: ReportOutcome>(outcome: Result<T>) {
    match outcome {
        Ok(value) => value.print(),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

/// Successful outcomes the demo knows how to print
trait ReportOutcome {
    /// Print the outcome to stdout
    fn print(&self);
}

impl ReportOutcome for () {
    fn print(&self) {}
}

impl ReportOutcome for CirculationEvent {
    fn print(&self) {
        println!("{}", self.to_string().cyan());
    }
}

use rs_markov_core::{Chain, GenerateOptions, Sampling};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Corpus to learn from, one sequence per line
    let corpus = std::env::args().nth(1).unwrap_or_else(|| "./data/corpus.txt".to_owned());

    let mut chain = Chain::new().named(vec!["corpus".to_owned()]);
    let lines = chain.seed_file(&corpus)?;
    log::info!("{} lines seeded, {} nodes", lines, chain.size());

    // Generation bounds are soft: after 'max_attempts' walks the last one is kept
    let mut options = GenerateOptions::bounded(Some(4), Some(12))?;
    options.set_max_attempts(20)?;

    // Invalid bounds are rejected when configuring
    match GenerateOptions::bounded(Some(10), Some(2)) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Raw frequency sampling
    for i in 0..5 {
        println!("Weighted {}: {}", i + 1, chain.generate(&options)?.join(" "));
    }

    // Gaussian smoothing, dominant transitions are dampened
    let options = options.with_sampling(Sampling::Smoothed);
    for i in 0..5 {
        println!("Smoothed {}: {}", i + 1, chain.generate(&options)?.join(" "));
    }

    // Context around a random token
    let around = chain.pick();
    let window = chain.fill(around, Some(8), Sampling::Weighted)?;
    let rendered = chain.render(&window).join(" ");
    println!("Around '{}': {}", chain[around].key(), rendered);

    // Unknown tokens are reported, not panicked on
    match chain.forward("zzzzzz", None, Sampling::Uniform) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    Ok(())
}

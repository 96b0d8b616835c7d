// Choose the first splits of an ID3 tree on the play tennis dataset.

use rid3::{entropy, parse_csv, select_attribute, LabelDistribution};

static ATTRIBUTES: [&str; 4] = ["outlook", "temperature", "humidity", "wind"];
static OUTLOOKS: [&str; 3] = ["sunny", "overcast", "rain"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load the data
    let train = include_str!("../data/play_tennis.csv");
    let train = parse_csv(train, ",")?;
    let view = train.view();

    println!("Entropy of the dataset: {:.4}", entropy(&view)?);
    let (gains, attribute) = select_attribute(&view)?;
    for (i, gain) in gains.iter() {
        println!("Gain {:<12} {:.4}", ATTRIBUTES[i], gain);
    }
    println!("Split on {}", ATTRIBUTES[attribute]);

    // One level deeper
    for (value, branch) in view.partition(attribute)? {
        let name = OUTLOOKS[value as usize];
        let labels = LabelDistribution::from_view(&branch);
        if labels.is_pure() {
            println!("\n{}: leaf, play={:?}", name, labels.majority());
            continue;
        }
        let (gains, attribute) = select_attribute(&branch)?;
        println!("\n{}: gains {}, split on {}", name, gains, ATTRIBUTES[attribute]);
    }

    Ok(())
}

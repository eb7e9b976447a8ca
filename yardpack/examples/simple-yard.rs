use yardpack::{CargoItem, YardPacker};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5)
        .map(|i| CargoItem::new(format!("container-{}", i), "20ft container", (6.1, 2.4)))
        .collect();

    let packer = YardPacker::new(20.0, 10.0).margin(0.5);
    let placements = packer.pack(&inputs).unwrap();

    println!("Placements: {:#?}", placements);
}

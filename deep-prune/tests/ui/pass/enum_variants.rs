use deep_prune::{Prunable, Prune};

#[derive(Prune)]
#[prune(rename_all = "kebab-case")]
enum Command {
    Ping,
    SetName { new_name: String },
    Move(i32, i32),
    Wrap(Box<Command>),
    #[prune(skip)]
    Internal(std::sync::mpsc::Sender<()>),
}

#[derive(Prune)]
enum Never {}

fn main() {
    let commands = vec![
        Command::Ping,
        Command::SetName {
            new_name: "x".into(),
        },
        Command::Move(1, 2),
        Command::Wrap(Box::new(Command::Ping)),
    ];
    let _ = commands.prune();
    let _ = std::mem::size_of::<Never>();
}

use deep_prune::{Prunable, Prune, Value};

mod mask {
    use deep_prune::Value;

    pub fn last_four(card: &String) -> Value {
        let start = card.len().saturating_sub(4);
        Value::from(card.get(start..).unwrap_or_default())
    }
}

struct Socket;

#[derive(Prune)]
#[prune(rename_all = "SCREAMING_SNAKE_CASE")]
struct Payment {
    #[prune(with = mask::last_four, rename = "card")]
    card_number: String,
    #[prune(skip)]
    socket: Socket,
    r#ref: Option<u32>,
}

fn main() {
    let payment = Payment {
        card_number: "4111111111111111".into(),
        socket: Socket,
        r#ref: None,
    };
    let _ = &payment.socket;
    let _: Value = payment.prune();
}

use bound_call::{bind, bind_ref, Callback};

struct Sensor {
    offset: f64,
}

impl Sensor {
    fn calibrate(&self, raw: f64) -> f64 {
        raw + self.offset
    }
}

fn scale(factor: f64, raw: f64) -> f64 {
    raw * factor
}

fn main() {
    let sensor = Sensor { offset: 0.5 };

    // Handlers built in different places end up behind one handle type;
    // the dispatch loop knows nothing about scaling or sensors.
    let mut handlers: Vec<(&str, Callback<'_, (f64,), f64>)> = vec![
        ("scaled", bind(scale, (0.1,))),
        ("calibrated", bind_ref(&sensor, Sensor::calibrate, ())),
    ];

    for (name, handler) in &mut handlers {
        println!("{name}: {}", handler.run((21.0,)));
    }
}

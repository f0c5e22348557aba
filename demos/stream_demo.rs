use nmea0183_codec::{
    Encode, Framer, MemoryTransport, Message, Sentence,
    messages::{DPT, MWV, Status, WindReference},
    na::NotAvailable,
    units::{CELSIUS_OFFSET, DEG_TO_RAD},
};

const CAPTURE: &[u8] = b"$GPRMC,092348.00,A,6035.04228,N,02115.15472,E,0.01,272.61,060815,7.2,E,D*34\r\n\
$IIDPT,10.5,0.9*7C\r\n\
$IIMTW,18.5,C*1F\r\n\
$GPXYZ,1*51\r\n\
$WIMWV,214.8,R,4.5,M,A*2E\r\n";

fn print(sentence: Sentence) {
    match Message::decode(&sentence) {
        Ok(Some(Message::RMC(rmc))) => {
            println!("RMC: lat {:.5}, lon {:.5}", rmc.latitude, rmc.longitude);
        }
        Ok(Some(Message::MTW(mtw))) => {
            println!("MTW: {:.1} C", mtw.temperature - CELSIUS_OFFSET);
        }
        Ok(Some(message)) => println!("{}: {message:?}", message.type_code()),
        Ok(None) => println!("{}: not supported", sentence.type_code()),
        Err(e) => println!("{}: decoding error: {e}", sentence.type_code()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut transport = MemoryTransport::new();
    // the DPT sentence carries a bad checksum and is dropped by the framer
    transport.push_incoming(CAPTURE);

    let mut framer = Framer::new(transport);
    let handled = framer.run_once(&mut print);
    println!("{handled} sentences received");

    let outbound = [
        DPT {
            depth_below_transducer: 10.5,
            offset: 0.9,
            range: f64::NA,
        }
        .encode("SD"),
        MWV {
            wind_angle: 45.0 * DEG_TO_RAD,
            reference: WindReference::True,
            wind_speed: 5.1,
            status: Some(Status::Valid),
        }
        .encode("WI"),
    ];

    for sentence in outbound {
        match sentence {
            Ok(sentence) => {
                if let Err(e) = framer.enqueue_send(&sentence) {
                    println!("send failed: {e}");
                }
            }
            Err(e) => println!("encoding error: {e}"),
        }
    }

    let written = framer.into_inner().take_written();
    print!("{}", String::from_utf8_lossy(&written));
}

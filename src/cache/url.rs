use std::net::Ipv6Addr;

pub fn full_url(host: &str, port: u16) -> String {
    let host = match host.parse::<Ipv6Addr>() {
        Ok(_)  => format!("[{}]", host),
        Err(_) => host.to_owned(),
    };

    match port {
        443 => format!("https://{}", host),
        80  => format!("http://{}", host),
        0   => format!("tcp://{}", host),
        _   => format!("tcp://{}:{}", host, port),
    }
}

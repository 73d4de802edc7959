use crate::cache::RawConnection;

// COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
const COLUMNS: usize = 9;

/// Header row of `lsof` output, which also marks the start of a sample.
pub fn header(line: &str) -> bool {
    line.split_whitespace().next() == Some("COMMAND")
}

/// Parse one row of `lsof -iTCP -sTCP:ESTABLISHED -P -n` output. Rows that
/// are too short or carry no `local->remote` pair yield `None`.
pub fn parse(line: &str) -> Option<RawConnection> {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() < COLUMNS || header(line) {
        return None;
    }

    let name = parts[COLUMNS - 1..].iter().find(|p| p.contains("->"))?;
    let (local, remote) = name.split_once("->")?;
    let (ip, port) = remote.rsplit_once(':')?;

    let ip   = ip.trim_start_matches('[').trim_end_matches(']');
    let port = port.parse::<u16>().ok()?;

    let status = parts.last().and_then(|last| {
        last.strip_prefix('(')?.strip_suffix(')')
    });

    Some(RawConnection {
        local:       Some(local.to_owned()),
        remote_ip:   Some(ip.to_owned()),
        remote_port: Some(port),
        label:       Some(parts[0].to_owned()),
        status:      status.map(str::to_owned),
        protocol:    None,
    })
}

/// Collects rows into samples, one sample per `lsof` invocation.
#[derive(Debug, Default)]
pub struct Samples {
    rows: Vec<RawConnection>,
}

impl Samples {
    /// Feed one line, returning the finished sample when the line starts
    /// a new one.
    pub fn push(&mut self, line: &str) -> Option<Vec<RawConnection>> {
        if header(line) || line.trim().is_empty() {
            return self.finish();
        }

        if let Some(conn) = parse(line) {
            self.rows.push(conn);
        }

        None
    }

    pub fn finish(&mut self) -> Option<Vec<RawConnection>> {
        match self.rows.is_empty() {
            true  => None,
            false => Some(std::mem::take(&mut self.rows)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{header, parse, Samples};

    const OUTPUT: &str = "\
COMMAND     PID USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
firefox    4121 will   87u  IPv4 0x5d1a3c2f8e9b1234      0t0  TCP 192.168.1.5:49448->140.82.121.4:443 (ESTABLISHED)
curl       5120 will    5u  IPv6 0x5d1a3c2f8e9b5678      0t0  TCP [2001:db8::5]:50112->[2606:4700::1111]:443 (ESTABLISHED)
ssh        6001 will    3u  IPv4 0x5d1a3c2f8e9b9abc      0t0  TCP 192.168.1.5:50000->10.0.0.2:22 (ESTABLISHED)
";

    #[test]
    fn rows() {
        let conns = OUTPUT.lines().filter_map(parse).collect::<Vec<_>>();
        assert_eq!(3, conns.len());

        assert_eq!(Some(("140.82.121.4", 443)), conns[0].remote());
        assert_eq!(Some("firefox"),            conns[0].label.as_deref());
        assert_eq!(Some("192.168.1.5:49448"),  conns[0].local.as_deref());
        assert_eq!(Some("ESTABLISHED"),        conns[0].status.as_deref());

        assert_eq!(Some(("2606:4700::1111", 443)), conns[1].remote());
        assert_eq!(Some("[2001:db8::5]:50112"),    conns[1].local.as_deref());
        assert_eq!(Some("curl"),                   conns[1].label.as_deref());

        assert_eq!(Some(("10.0.0.2", 22)), conns[2].remote());
    }

    #[test]
    fn skipped() {
        assert!(header("COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME"));
        assert!(parse("COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME").is_none());
        assert!(parse("firefox 4121 will 87u IPv4 0x5d1a TCP 1.2.3.4:443").is_none());
        assert!(parse("nginx 80 www 6u IPv4 0x5d1a 0t0 TCP *:80 (LISTEN)").is_none());
        assert!(parse("curl 5120 will 5u IPv4 0x5d1a 0t0 TCP 10.0.0.1:5000->10.0.0.2 (ESTABLISHED)").is_none());
        assert!(parse("curl 5120 will 5u IPv4 0x5d1a 0t0 TCP 10.0.0.1:5000->10.0.0.2:http (ESTABLISHED)").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn samples() {
        let mut samples = Samples::default();
        let mut done    = Vec::new();

        for line in OUTPUT.lines().chain(OUTPUT.lines()) {
            done.extend(samples.push(line));
        }
        done.extend(samples.finish());

        assert_eq!(vec![3, 3], done.iter().map(Vec::len).collect::<Vec<_>>());
        assert!(samples.finish().is_none());
    }
}

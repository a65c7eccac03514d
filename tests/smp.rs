//! Várias CPUs despachando a mesma tabela

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use common::*;
use forge_mlfq::sched::config::NCPU;
use forge_mlfq::sys::Pid;
use forge_mlfq::{Dispatch, ProcError};

const CPUS: usize = 4;
const PAIRS: u32 = 80;

#[test]
fn fork_wait_across_cpus_reaps_each_child_once() {
    let (tx, rx) = channel();
    let kernel = boot();
    for pid in 2..PAIRS + 2 {
        kernel.hal().program(pid, |_| {});
    }
    kernel.hal().program(1, move |k| {
        let mut reaped = Vec::new();
        for _ in 0..PAIRS {
            let child = k.fork();
            reaped.push((child, k.wait()));
        }
        tx.send((reaped, k.wait())).unwrap();
        idle_init(k);
    });
    kernel.user_init().unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let mut cpus: Vec<_> = (1..CPUS)
        .map(|cpu| spawn_cpu(kernel, cpu, stop.clone()))
        .collect();
    // Timer numa CPU que não despacha
    cpus.push(thread::spawn({
        let stop = stop.clone();
        move || {
            set_cpu(NCPU - 1);
            while !stop.load(Ordering::SeqCst) {
                kernel.timer_tick();
                thread::sleep(Duration::from_micros(200));
            }
        }
    }));

    let deadline = Instant::now() + Duration::from_secs(30);
    let (reaped, last) = loop {
        if let Ok(msg) = rx.try_recv() {
            break msg;
        }
        assert!(Instant::now() < deadline, "init never finished");
        if kernel.run_once() == Dispatch::Idle {
            thread::yield_now();
        }
    };
    stop.store(true, Ordering::SeqCst);
    for cpu in cpus {
        cpu.join().unwrap();
    }

    assert_eq!(reaped.len(), PAIRS as usize);
    for (n, (child, waited)) in reaped.iter().enumerate() {
        let pid = Pid(n as u32 + 2);
        assert_eq!(*child, Ok(pid));
        assert_eq!(*waited, Ok(pid));
    }
    assert_eq!(last, Err(ProcError::NoChildren));

    let mut live = 0;
    kernel.for_each_process(|_| live += 1);
    assert_eq!(live, 1);
    assert!(kernel.process_info(Pid::INIT).is_some());
}

//! Filas MLFQ, boost e setPriority

mod common;

use common::*;
use forge_mlfq::sched::config::{BOOST_INTERVAL, L0_QUANTUM, L1_QUANTUM, L2_QUANTUM};
use forge_mlfq::sys::Pid;
use forge_mlfq::{Dispatch, Level, ProcError};

const INIT: Pid = Pid::INIT;

#[test]
fn init_walks_down_the_levels() {
    let kernel = boot_with_init(idle_init);

    let info = kernel.process_info(INIT).unwrap();
    assert_eq!(info.name(), "initcode");
    assert_eq!(info.level, Level::L0);
    assert_eq!(info.priority, 3);
    assert_eq!(info.parent, None);

    let l0 = run(kernel, L0_QUANTUM as usize);
    for d in &l0[..l0.len() - 1] {
        assert_eq!(*d, Dispatch::Requeued { pid: INIT, level: Level::L0 });
    }
    assert_eq!(
        l0.last(),
        Some(&Dispatch::Demoted { pid: INIT, from: Level::L0, to: Level::L1 })
    );
    let info = kernel.process_info(INIT).unwrap();
    assert_eq!(info.level, Level::L1);
    assert_eq!(info.ticks, 0);

    let l1 = run(kernel, L1_QUANTUM as usize);
    assert_eq!(
        l1.last(),
        Some(&Dispatch::Demoted { pid: INIT, from: Level::L1, to: Level::L2 })
    );
    assert_eq!(queue_pids(kernel, Level::L2), vec![INIT]);

    let l2 = run(kernel, L2_QUANTUM as usize);
    assert_eq!(l2.last(), Some(&Dispatch::Aged { pid: INIT, priority: 2 }));

    // Piso em 0
    run(kernel, 3 * L2_QUANTUM as usize);
    assert_eq!(kernel.process_info(INIT).unwrap().priority, 0);
    run(kernel, L2_QUANTUM as usize);
    let info = kernel.process_info(INIT).unwrap();
    assert_eq!(info.priority, 0);
    assert_eq!(info.level, Level::L2);
}

#[test]
fn empty_machine_is_idle() {
    let kernel = boot();
    assert_eq!(kernel.run_once(), Dispatch::Idle);
    assert_eq!(kernel.level(), Err(ProcError::NoCurrent));
}

fn three_spinners() -> (&'static forge_mlfq::Kernel<Sim>, Vec<Pid>) {
    let (tx, rx) = channel();
    let kernel = boot_with_init(move |k| {
        let a = k.fork().unwrap();
        let b = k.fork().unwrap();
        tx.send(vec![a, b]).unwrap();
        idle_init(k);
    });
    let kids = run_until(kernel, &rx, 10);
    (kernel, kids)
}

#[test]
fn boost_moves_everyone_back_to_l0() {
    let (kernel, kids) = three_spinners();
    run(kernel, 60);
    assert_eq!(kernel.queue_len(Level::L0), 0);
    assert_eq!(kernel.queue_len(Level::L2), 3);
    let before = queue_pids(kernel, Level::L2);

    kernel.boost();

    assert_eq!(kernel.queue_len(Level::L1), 0);
    assert_eq!(kernel.queue_len(Level::L2), 0);
    assert_eq!(queue_pids(kernel, Level::L0), before);
    for pid in [INIT, kids[0], kids[1]] {
        let info = kernel.process_info(pid).unwrap();
        assert_eq!(info.level, Level::L0);
        assert_eq!(info.priority, 3);
        assert_eq!(info.ticks, 0);
    }
}

#[test]
fn boost_during_run_ends_iteration() {
    let kernel = boot_with_init(|k| {
        for _ in 0..L0_QUANTUM {
            k.yield_now();
        }
        // Já em L1
        k.boost();
        idle_init(k);
    });

    let l0 = run(kernel, L0_QUANTUM as usize);
    assert_eq!(
        l0.last(),
        Some(&Dispatch::Demoted { pid: INIT, from: Level::L0, to: Level::L1 })
    );

    assert_eq!(kernel.run_once(), Dispatch::Boosted { pid: INIT });
    assert_eq!(queue_pids(kernel, Level::L0), vec![INIT]);
    assert_eq!(kernel.queue_len(Level::L1), 0);
    let info = kernel.process_info(INIT).unwrap();
    assert_eq!(info.level, Level::L0);
    assert_eq!(info.priority, 3);

    // Segue normal a partir de L0
    assert_eq!(kernel.run_once(), Dispatch::Requeued { pid: INIT, level: Level::L0 });
}

#[test]
fn timer_boosts_every_interval() {
    let (kernel, _kids) = three_spinners();
    run(kernel, 60);
    assert_eq!(kernel.queue_len(Level::L2), 3);

    for _ in 0..BOOST_INTERVAL - 1 {
        kernel.timer_tick();
    }
    assert_eq!(kernel.queue_len(Level::L2), 3);

    kernel.timer_tick();
    assert_eq!(kernel.ticks(), BOOST_INTERVAL);
    assert_eq!(kernel.queue_len(Level::L0), 3);
}

#[test]
fn l2_runs_lowest_priority_first() {
    let (kernel, _kids) = three_spinners();
    // 3 x (4 + 6) despachos: todos chegam a L2 com prioridade 3
    run(kernel, 29);
    assert_eq!(kernel.queue_len(Level::L2), 3);
    let order = queue_pids(kernel, Level::L2);
    let first = order[0];

    // Empate gira em FIFO; o primeiro esgota o quantum no seu 8º despacho
    let rounds = 3 * (L2_QUANTUM as usize - 1) + 1;
    let burst = run(kernel, rounds);
    let picked: Vec<Pid> = burst[..6].iter().map(|d| d.pid().unwrap()).collect();
    assert_eq!(picked, [order.clone(), order].concat());
    assert_eq!(burst.last(), Some(&Dispatch::Aged { pid: first, priority: 2 }));

    // Agora é o único com prioridade 2
    for d in run(kernel, L2_QUANTUM as usize - 1) {
        assert_eq!(d, Dispatch::Requeued { pid: first, level: Level::L2 });
    }
    assert_eq!(kernel.run_once(), Dispatch::Aged { pid: first, priority: 1 });
}

#[test]
fn set_priority_only_from_parent() {
    let (tx, rx) = channel();
    let kernel = boot();
    // O filho tenta mexer no pai: ignorado
    kernel.hal().program(2, {
        let tx = tx.clone();
        move |k| {
            k.set_priority(INIT, 0);
            tx.send(None).unwrap();
            loop {
                k.yield_now();
            }
        }
    });
    kernel.hal().program(1, move |k| {
        let child = k.fork().unwrap();
        k.set_priority(child, 1);
        k.set_priority(child, 7);
        k.set_priority(child, -1);
        tx.send(Some(child)).unwrap();
        idle_init(k);
    });
    kernel.user_init().unwrap();

    let child = run_until(kernel, &rx, 10).unwrap();
    assert_eq!(kernel.process_info(child).unwrap().priority, 1);

    assert_eq!(run_until(kernel, &rx, 10), None);
    assert_eq!(kernel.process_info(INIT).unwrap().priority, 3);

    // Sem processo atual: nada muda
    kernel.set_priority(child, 0);
    assert_eq!(kernel.process_info(child).unwrap().priority, 1);
}

#[test]
fn get_level_reports_current_queue() {
    let (tx, rx) = channel();
    let kernel = boot_with_init(move |k| {
        loop {
            tx.send(k.level()).unwrap();
            k.yield_now();
        }
    });

    let mut seen = Vec::new();
    for _ in 0..(L0_QUANTUM + 2) {
        kernel.run_once();
        seen.push(rx.try_recv().unwrap().unwrap());
    }
    assert_eq!(seen[0], Level::L0);
    assert_eq!(seen[L0_QUANTUM as usize - 1], Level::L0);
    assert_eq!(seen[L0_QUANTUM as usize], Level::L1);
}

use hal::mock::{HalCall, RecordingHal};
use hal::{Direction, Level};

use crate::{GpioManager, InstanceAllocator, PoolAllocator};

fn pool_manager() -> GpioManager<RecordingHal, PoolAllocator> {
    GpioManager::new(RecordingHal::new())
}

#[test]
fn create_does_not_touch_hardware() {
    let mut gpio = pool_manager();
    for port in [0u8, 1, 7, 255] {
        for bit in [0u8, 5, 31, 255] {
            let pin = gpio.create(port, bit).unwrap();
            let instance = gpio.instance(&pin).unwrap();
            assert_eq!((instance.port(), instance.bit()), (port, bit));
            assert_eq!(instance.direction(), Direction::Input);
            gpio.release(pin).unwrap();
        }
    }
    assert!(gpio.hal().calls().is_empty());
}

#[test]
fn set_output_programs_direction_every_call() {
    let mut gpio = pool_manager();
    let mut pin = gpio.create(2, 4).unwrap();

    gpio.set_output(&mut pin, true).unwrap();
    gpio.set_output(&mut pin, false).unwrap();
    gpio.set_output(&mut pin, false).unwrap();

    assert_eq!(
        gpio.hal().calls(),
        &[
            HalCall::SetDirection {
                port: 2,
                bit: 4,
                direction: Direction::Output
            },
            HalCall::SetDirection {
                port: 2,
                bit: 4,
                direction: Direction::Input
            },
            HalCall::SetDirection {
                port: 2,
                bit: 4,
                direction: Direction::Input
            },
        ]
    );
    assert_eq!(gpio.instance(&pin).unwrap().direction(), Direction::Input);
}

#[test]
fn set_state_on_input_is_silent_noop() {
    let mut gpio = pool_manager();
    let pin = gpio.create(0, 1).unwrap();

    gpio.set_state(&pin, Level::High).unwrap();
    gpio.set_state(&pin, Level::Low).unwrap();

    assert_eq!(gpio.hal().output_writes(), 0);
    assert!(gpio.hal().calls().is_empty());
    assert_eq!(gpio.instance(&pin).unwrap().direction(), Direction::Input);
}

#[test]
fn set_state_on_output_writes_exact_level() {
    let mut gpio = pool_manager();
    let mut pin = gpio.create(3, 9).unwrap();
    gpio.set_output(&mut pin, true).unwrap();
    gpio.hal_mut().clear();

    gpio.set_state(&pin, Level::High).unwrap();
    assert_eq!(
        gpio.hal().calls(),
        &[HalCall::SetOutputLevel {
            port: 3,
            bit: 9,
            level: Level::High
        }]
    );

    gpio.hal_mut().clear();
    gpio.set_state(&pin, Level::Low).unwrap();
    assert_eq!(
        gpio.hal().calls(),
        &[HalCall::SetOutputLevel {
            port: 3,
            bit: 9,
            level: Level::Low
        }]
    );
}

#[test]
fn set_state_after_switching_back_to_input_is_noop() {
    let mut gpio = pool_manager();
    let mut pin = gpio.create(3, 9).unwrap();
    gpio.set_output(&mut pin, true).unwrap();
    gpio.set_output(&mut pin, false).unwrap();

    gpio.set_state(&pin, Level::High).unwrap();
    assert_eq!(gpio.hal().output_writes(), 0);
}

#[test]
fn get_state_reads_hardware_in_either_direction() {
    let mut gpio = pool_manager();
    gpio.hal_mut().set_input(4, 2, Level::High);
    let mut pin = gpio.create(4, 2).unwrap();

    assert_eq!(gpio.get_state(&pin).unwrap(), Level::High);
    assert_eq!(gpio.hal().input_reads(), 1);

    gpio.set_output(&mut pin, true).unwrap();
    gpio.hal_mut().set_input(4, 2, Level::Low);
    assert_eq!(gpio.get_state(&pin).unwrap(), Level::Low);
    assert_eq!(gpio.hal().input_reads(), 2);
    assert_eq!(
        gpio.hal().calls().last(),
        Some(&HalCall::ReadInputLevel { port: 4, bit: 2 })
    );
}

#[test]
fn get_state_is_not_cached() {
    let mut gpio = pool_manager();
    let pin = gpio.create(0, 0).unwrap();

    assert_eq!(gpio.get_state(&pin).unwrap(), Level::Low);
    gpio.hal_mut().set_input(0, 0, Level::High);
    assert_eq!(gpio.get_state(&pin).unwrap(), Level::High);
    assert_eq!(gpio.hal().input_reads(), 2);
}

#[test]
fn red_led_sequence() {
    let mut gpio = pool_manager();
    let mut led = gpio.create(1, 7).unwrap();
    gpio.set_output(&mut led, true).unwrap();
    gpio.set_state(&led, Level::Low).unwrap();

    assert_eq!(
        gpio.hal().calls(),
        &[
            HalCall::SetDirection {
                port: 1,
                bit: 7,
                direction: Direction::Output
            },
            HalCall::SetOutputLevel {
                port: 1,
                bit: 7,
                level: Level::Low
            },
        ]
    );
    assert_eq!(gpio.hal().input_reads(), 0);
}

#[test]
fn release_does_not_touch_hardware() {
    let mut gpio = pool_manager();
    let mut pin = gpio.create(1, 1).unwrap();
    gpio.set_output(&mut pin, true).unwrap();
    gpio.hal_mut().clear();

    gpio.release(pin).unwrap();
    assert!(gpio.hal().calls().is_empty());
    assert!(gpio.allocator().stats().is_empty());
}

#[cfg(feature = "alloc")]
#[test]
fn heap_manager_behaves_like_pool_manager() {
    use crate::HeapAllocator;

    let mut gpio: GpioManager<RecordingHal, HeapAllocator> = GpioManager::new(RecordingHal::new());
    let mut led = gpio.create(1, 7).unwrap();
    assert!(gpio.hal().calls().is_empty());

    gpio.set_state(&led, Level::High).unwrap();
    gpio.set_output(&mut led, true).unwrap();
    gpio.set_state(&led, Level::Low).unwrap();
    gpio.hal_mut().set_input(1, 7, Level::High);
    assert_eq!(gpio.get_state(&led).unwrap(), Level::High);

    assert_eq!(
        gpio.hal().calls(),
        &[
            HalCall::SetDirection {
                port: 1,
                bit: 7,
                direction: Direction::Output
            },
            HalCall::SetOutputLevel {
                port: 1,
                bit: 7,
                level: Level::Low
            },
            HalCall::ReadInputLevel { port: 1, bit: 7 },
        ]
    );

    gpio.release(led).unwrap();
    assert_eq!(gpio.allocator().live(), 0);
}

#[cfg(feature = "alloc")]
#[test]
fn heap_manager_has_no_instance_limit() {
    use crate::{HeapAllocator, GPIO_MAX_INSTANCES};

    let mut gpio: GpioManager<RecordingHal, HeapAllocator> = GpioManager::new(RecordingHal::new());
    let pins: Vec<_> = (0..=GPIO_MAX_INSTANCES as u8)
        .map(|bit| gpio.create(0, bit))
        .collect();

    assert_eq!(pins.len(), GPIO_MAX_INSTANCES + 1);
    assert!(pins.iter().all(Result::is_ok));
    assert_eq!(gpio.allocator().live(), GPIO_MAX_INSTANCES + 1);
}

#[test]
fn manager_works_over_borrowed_hal() {
    let mut hal = RecordingHal::new();
    {
        let mut gpio: GpioManager<&mut RecordingHal, PoolAllocator<1>> = GpioManager::new(&mut hal);
        let mut pin = gpio.create(5, 5).unwrap();
        gpio.set_output(&mut pin, true).unwrap();
    }
    assert_eq!(hal.calls().len(), 1);
}

#[test]
fn into_parts_returns_hal_and_allocator() {
    let mut gpio = pool_manager();
    let pin = gpio.create(0, 0).unwrap();
    let (hal, pool) = gpio.into_parts();

    assert!(hal.calls().is_empty());
    assert_eq!(pool.get(&pin).unwrap().port(), 0);
}

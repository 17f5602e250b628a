//! The tweak definitions. Pure data: nothing in this module touches the
//! system. Order is stable and load-bearing (UI rows, batch operations).

use super::{Action, ExeTarget, Risk, ServiceStart, Tweak};
use crate::store::{Hive, ValueData};

/// Ultimate Performance power scheme template.
const ULTIMATE_PERFORMANCE: &str = "e9a42b02-d5df-448d-aa00-03f14749eb61";
/// High Performance power scheme.
const HIGH_PERFORMANCE: &str = "8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c";

const MULTIMEDIA_PROFILE: &str =
    "SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion\\Multimedia\\SystemProfile";
const GAMES_TASKS: &str =
    "SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion\\Multimedia\\SystemProfile\\Tasks\\Games";
const MEMORY_MANAGEMENT: &str =
    "SYSTEM\\CurrentControlSet\\Control\\Session Manager\\Memory Management";
const TCPIP_PARAMETERS: &str = "SYSTEM\\CurrentControlSet\\Services\\Tcpip\\Parameters";
const FILESYSTEM: &str = "SYSTEM\\CurrentControlSet\\Control\\FileSystem";
const CONTENT_DELIVERY: &str =
    "Software\\Microsoft\\Windows\\CurrentVersion\\ContentDeliveryManager";
const GAME_CONFIG_STORE: &str = "System\\GameConfigStore";
const PRIORITY_CONTROL: &str = "SYSTEM\\CurrentControlSet\\Control\\PriorityControl";

fn dw(hive: Hive, path: &'static str, name: &'static str, value: u32) -> Action {
    Action::ConfigValue {
        hive,
        path,
        name,
        value: ValueData::Dword(value),
    }
}

fn tx(hive: Hive, path: &'static str, name: &'static str, value: &str) -> Action {
    Action::ConfigValue {
        hive,
        path,
        name,
        value: ValueData::Text(value.to_string()),
    }
}

fn svc(service: &'static str, start: ServiceStart) -> Action {
    Action::ServiceStartPolicy { service, start }
}

fn plan(candidate: &'static str) -> Action {
    Action::PowerSchemeSwitch { candidate }
}

pub fn all_tweaks() -> Vec<Tweak> {
    vec![
        // ======= POWER =======
        Tweak {
            id: "power_plan",
            category: "Power",
            name: "Activate High / Ultimate Performance power plan",
            description: "Switches the active power scheme to a performance-focused profile. \
                          Tries Ultimate Performance first, falls back to High Performance.",
            explanation: "The default Balanced plan throttles CPU clocks to save power; a \
                          performance plan keeps clocks high at the cost of power draw.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![plan(ULTIMATE_PERFORMANCE), plan(HIGH_PERFORMANCE)],
        },
        Tweak {
            id: "disable_usb_suspend",
            category: "Power",
            name: "Disable USB selective suspend",
            description: "Prevents power-saving of USB devices, avoiding mouse/keyboard \
                          disconnects during gaming.",
            explanation: "Selective suspend can briefly sleep peripherals, leading to missed \
                          inputs or reconnects mid-game.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Services\\USB\\DisableSelectiveSuspend",
                "DisableSelectiveSuspend",
                1,
            )],
        },
        // ======= GAMING =======
        Tweak {
            id: "disable_gamedvr",
            category: "Gaming",
            name: "Disable Game DVR background capture",
            description: "Stops background gameplay recording that uses GPU resources.",
            explanation: "Game DVR constantly records the last seconds of gameplay using the \
                          GPU encoder, which can cause frame drops.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![
                dw(
                    Hive::Hkcu,
                    "Software\\Microsoft\\Windows\\CurrentVersion\\GameDVR",
                    "AppCaptureEnabled",
                    0,
                ),
                dw(Hive::Hkcu, GAME_CONFIG_STORE, "GameDVR_Enabled", 0),
            ],
        },
        Tweak {
            id: "disable_game_bar",
            category: "Gaming",
            name: "Disable Xbox Game Bar overlay",
            description: "Removes the Game Bar overlay process to reclaim system resources.",
            explanation: "Even when not visible, the overlay's background services consume \
                          memory and CPU.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![
                dw(
                    Hive::Hkcu,
                    "Software\\Microsoft\\GameBar",
                    "AllowAutoGameMode",
                    0,
                ),
                dw(
                    Hive::Hkcu,
                    "Software\\Microsoft\\GameBar",
                    "ShowStartupPanel",
                    0,
                ),
            ],
        },
        Tweak {
            id: "disable_fullscreen_optim",
            category: "Gaming",
            name: "Disable fullscreen optimizations globally",
            description: "Restores true exclusive fullscreen for lower input lag.",
            explanation: "The compositor converts exclusive fullscreen to borderless windowed \
                          mode, adding a frame of latency.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![
                dw(
                    Hive::Hkcu,
                    GAME_CONFIG_STORE,
                    "GameDVR_DXGIHonorFSEWindowsCompatible",
                    1,
                ),
                dw(Hive::Hkcu, GAME_CONFIG_STORE, "GameDVR_FSEBehavior", 2),
                dw(Hive::Hkcu, GAME_CONFIG_STORE, "GameDVR_FSEBehaviorMode", 2),
            ],
        },
        Tweak {
            id: "hardware_accel_sched",
            category: "Gaming",
            name: "Enable hardware-accelerated GPU scheduling",
            description: "Lets the GPU manage its own memory scheduling on supported hardware.",
            explanation: "Moves VRAM scheduling from the kernel to GPU firmware; can shave \
                          about a millisecond off frame delivery. Needs a restart.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\GraphicsDrivers",
                "HwSchMode",
                2,
            )],
        },
        // ======= LATENCY =======
        Tweak {
            id: "system_responsiveness",
            category: "Latency",
            name: "Lower system responsiveness reservation",
            description: "Sets SystemResponsiveness to 10 so multimedia threads get more CPU time.",
            explanation: "20% of CPU is reserved for background tasks by default; 10 reduces \
                          that reservation, giving games more headroom.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, MULTIMEDIA_PROFILE, "SystemResponsiveness", 10)],
        },
        Tweak {
            id: "timer_resolution",
            category: "Latency",
            name: "Enable global timer resolution requests",
            description: "Allows applications to request high-resolution (0.5 ms) timers.",
            explanation: "The default 15.6 ms timer tick hurts frame pacing consistency; \
                          high-resolution requests fix that at a small power cost.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\Session Manager\\kernel",
                "GlobalTimerResolutionRequests",
                1,
            )],
        },
        Tweak {
            id: "disable_power_throttling",
            category: "Latency",
            name: "Disable CPU power throttling",
            description: "Prevents frequency throttling for power savings during gaming sessions.",
            explanation: "Background processes can be throttled via Intel Speed Shift; this \
                          keeps clocks at maximum.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\Power\\PowerThrottling",
                "PowerThrottlingOff",
                1,
            )],
        },
        Tweak {
            id: "disable_spectre_meltdown",
            category: "Latency",
            name: "Disable Spectre/Meltdown mitigations",
            description: "Disables CPU vulnerability mitigations for significant performance \
                          gains. Reduces security; only for dedicated gaming PCs.",
            explanation: "The mitigations add overhead to every syscall and context switch, \
                          costing 5-30% on affected CPUs.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![
                dw(Hive::Hklm, MEMORY_MANAGEMENT, "FeatureSettingsOverride", 3),
                dw(
                    Hive::Hklm,
                    MEMORY_MANAGEMENT,
                    "FeatureSettingsOverrideMask",
                    3,
                ),
            ],
        },
        // ======= FPS =======
        Tweak {
            id: "games_task_priority",
            category: "FPS",
            name: "Increase game task GPU & scheduling priority",
            description: "Raises the MMCSS Games profile priorities for smoother frame pacing.",
            explanation: "GPU Priority 8 plus a High scheduling category lets game threads \
                          preempt background work.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![
                dw(Hive::Hklm, GAMES_TASKS, "GPU Priority", 8),
                dw(Hive::Hklm, GAMES_TASKS, "Priority", 6),
                tx(Hive::Hklm, GAMES_TASKS, "Scheduling Category", "High"),
            ],
        },
        Tweak {
            id: "cs2_gpu_pref",
            category: "FPS",
            name: "CS2: High-performance GPU preference",
            description: "Always use the discrete GPU for the CS2 executable.",
            explanation: "Dual-GPU systems may default to integrated graphics; this forces \
                          the high-performance GPU.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![Action::GpuPreference {
                exe: ExeTarget::Auto,
                preference: "GpuPreference=2;",
            }],
        },
        Tweak {
            id: "cs2_launch_opts",
            category: "FPS",
            name: "CS2: Recommended launch options",
            description: "Shows recommended launch options (-high -novid -threads N) to copy \
                          into Steam. Informational only, changes nothing.",
            explanation: "-high raises process priority, -novid skips the intro video, \
                          -threads should match your CPU thread count.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![],
        },
        Tweak {
            id: "nvidia_threaded_optim",
            category: "FPS",
            name: "NVIDIA: Threaded optimization hint",
            description: "Stores a reminder to enable threaded optimization in the NVIDIA \
                          Control Panel.",
            explanation: "Threaded optimization lets the driver use multiple CPU threads for \
                          command processing; benefits vary by engine.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![tx(
                Hive::Hkcu,
                "Software\\Frametune\\Hints",
                "NVIDIA_ThreadedOptimization",
                "Enable in NVIDIA Control Panel > Manage 3D Settings > Threaded Optimization = On",
            )],
        },
        Tweak {
            id: "large_system_cache",
            category: "FPS",
            name: "Enable large system cache (16 GB+ RAM)",
            description: "Uses a larger disk cache, benefiting texture streaming with ample RAM.",
            explanation: "A larger file cache reduces disk I/O for texture streaming and level \
                          loads; only sensible with plenty of memory.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, MEMORY_MANAGEMENT, "LargeSystemCache", 1)],
        },
        Tweak {
            id: "disable_paging_exec",
            category: "FPS",
            name: "Keep drivers and kernel in RAM (16 GB+)",
            description: "Prevents paging of executive code to disk, reducing micro-stutters.",
            explanation: "Kernel-mode drivers can normally be paged out; keeping them resident \
                          eliminates page-fault stutters.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, MEMORY_MANAGEMENT, "DisablePagingExecutive", 1)],
        },
        // ======= NETWORK =======
        Tweak {
            id: "network_throttle",
            category: "Network",
            name: "Disable multimedia network throttling",
            description: "Removes the NIC throughput cap applied while multimedia apps run.",
            explanation: "Network I/O is throttled for multimedia workloads by default; \
                          0xFFFFFFFF disables the cap entirely.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                MULTIMEDIA_PROFILE,
                "NetworkThrottlingIndex",
                0xffff_ffff,
            )],
        },
        Tweak {
            id: "tcp_ack_frequency",
            category: "Network",
            name: "TCP ACK frequency = 1",
            description: "Sends TCP ACKs immediately instead of batching, reducing round-trip \
                          time in online games.",
            explanation: "ACKs are batched every 2 segments or 200 ms by default; frequency 1 \
                          acknowledges every packet.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "TcpAckFrequency", 1)],
        },
        Tweak {
            id: "nagle_disable",
            category: "Network",
            name: "Disable Nagle's algorithm",
            description: "Sends small packets immediately instead of buffering them.",
            explanation: "Nagle buffering adds up to 200 ms of latency on small game packets.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "TcpNoDelay", 1)],
        },
        Tweak {
            id: "disable_auto_tuning",
            category: "Network",
            name: "Disable TCP receive window auto-tuning",
            description: "Stops dynamic TCP window resizing, reducing ping variability.",
            explanation: "Auto-tuning helps throughput but can cause ping spikes in \
                          latency-sensitive games.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "EnableWsd", 0)],
        },
        Tweak {
            id: "dns_cache_optimize",
            category: "Network",
            name: "Optimize DNS cache lifetimes",
            description: "Raises DNS cache TTLs so fewer lookups happen mid-session.",
            explanation: "Longer cache lifetimes mean fewer DNS round-trips when connecting \
                          to game servers.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![
                dw(
                    Hive::Hklm,
                    "SYSTEM\\CurrentControlSet\\Services\\Dnscache\\Parameters",
                    "MaxCacheTtl",
                    86400,
                ),
                dw(
                    Hive::Hklm,
                    "SYSTEM\\CurrentControlSet\\Services\\Dnscache\\Parameters",
                    "MaxNegativeCacheTtl",
                    5,
                ),
            ],
        },
        Tweak {
            id: "network_adapter_offload",
            category: "Network",
            name: "Disable TCP/IP task offloading",
            description: "Moves checksum and segmentation work off the NIC back to the CPU.",
            explanation: "Some NIC firmware handles offloaded work poorly and causes latency \
                          spikes.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "DisableTaskOffload", 1)],
        },
        Tweak {
            id: "disable_ecn",
            category: "Network",
            name: "Disable Explicit Congestion Notification",
            description: "Turns off ECN, which misbehaves with some game servers.",
            explanation: "Many game servers and routers handle ECN badly, causing connection \
                          issues and extra header processing.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "ECNCapability", 0)],
        },
        Tweak {
            id: "default_ttl",
            category: "Network",
            name: "Set default TTL to 64",
            description: "Uses the common Unix default TTL instead of 128.",
            explanation: "TTL 64 is the internet norm; the higher default wastes header \
                          budget on long routes.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "DefaultTTL", 64)],
        },
        Tweak {
            id: "disable_lso",
            category: "Network",
            name: "Disable TCP Large Send Offload",
            description: "Stops the NIC from batching TCP segments before sending.",
            explanation: "Batching suits bulk transfers but delays the small packets games \
                          send.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, TCPIP_PARAMETERS, "EnableTCPChimney", 0)],
        },
        // ======= SERVICES =======
        Tweak {
            id: "mmcss_priority",
            category: "Services",
            name: "Keep MMCSS scheduling active (NoLazyMode)",
            description: "Keeps multimedia thread priorities enforced continuously.",
            explanation: "In lazy mode the scheduler relaxes priority boosting after a few \
                          idle seconds.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, MULTIMEDIA_PROFILE, "NoLazyMode", 1)],
        },
        Tweak {
            id: "disable_diagtrack",
            category: "Services",
            name: "Disable Connected User Experiences (DiagTrack)",
            description: "Stops the telemetry service that periodically uses CPU and disk.",
            explanation: "DiagTrack wakes up to collect and upload diagnostics, generating \
                          disk I/O that can cause micro-stutters.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![svc("DiagTrack", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_sysmain",
            category: "Services",
            name: "Disable SysMain / Superfetch (SSD users)",
            description: "Stops app preloading that provides minimal benefit on SSDs.",
            explanation: "Preloading was designed for spinning disks; on SSDs it wastes RAM \
                          and causes writes.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![svc("SysMain", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_prefetch",
            category: "Services",
            name: "Disable Prefetch (SSD users)",
            description: "Turns off the legacy Prefetch feature, unnecessary on SSDs.",
            explanation: "Prefetch optimizes HDD read layout; SSD random reads are effectively \
                          instant already.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\Session Manager\\Memory Management\\PrefetchParameters",
                "EnablePrefetcher",
                0,
            )],
        },
        Tweak {
            id: "disable_superfetch",
            category: "Services",
            name: "Disable Superfetch in registry (SSD users)",
            description: "Registry counterpart to the SysMain service disable.",
            explanation: "Both the service and this setting should be disabled together on \
                          SSD systems.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\Session Manager\\Memory Management\\PrefetchParameters",
                "EnableSuperfetch",
                0,
            )],
        },
        Tweak {
            id: "disable_search_indexer",
            category: "Services",
            name: "Disable search indexing",
            description: "Stops background file indexing that competes with game asset loads.",
            explanation: "The indexer's disk I/O competes directly with streaming game assets.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![svc("WSearch", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_windows_update_service",
            category: "Services",
            name: "Set the update service to manual start",
            description: "Prevents update downloads during gaming; checks only when triggered.",
            explanation: "Large update downloads consume bandwidth and disk I/O at the worst \
                          possible times.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![svc("wuauserv", ServiceStart::Manual)],
        },
        Tweak {
            id: "disable_remote_desktop",
            category: "Services",
            name: "Disable Remote Desktop services",
            description: "Stops network-listening remote desktop services.",
            explanation: "If unused, the listener wastes memory and leaves a common attack \
                          vector open.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![svc("TermService", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_print_spooler",
            category: "Services",
            name: "Disable Print Spooler (if no printer)",
            description: "Stops the spooler service; skip this if you print.",
            explanation: "The spooler has a history of critical vulnerabilities and idles at \
                          around 10 MB of RAM.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![svc("Spooler", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_error_reporting",
            category: "Services",
            name: "Disable error reporting",
            description: "Stops crash dump collection and upload after crashes.",
            explanation: "Crash dumps can run to hundreds of megabytes of disk I/O right when \
                          you are restarting your game.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![svc("WerSvc", ServiceStart::Disabled)],
        },
        Tweak {
            id: "disable_remote_registry",
            category: "Services",
            name: "Disable Remote Registry service",
            description: "Stops remote computers from modifying the local registry.",
            explanation: "Remote registry access is virtually never needed on a gaming PC and \
                          is a significant security risk.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![svc("RemoteRegistry", ServiceStart::Disabled)],
        },
        // ======= VISUAL =======
        Tweak {
            id: "disable_transparency",
            category: "Visual",
            name: "Disable transparency effects",
            description: "Turns off acrylic/blur effects, freeing GPU compositing resources.",
            explanation: "Transparency runs GPU shaders per frame; the saving matters most on \
                          integrated graphics.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize",
                "EnableTransparency",
                0,
            )],
        },
        Tweak {
            id: "disable_animations",
            category: "Visual",
            name: "Disable window animations & effects",
            description: "Disables minimize/maximize animations and menu fades.",
            explanation: "Purely cosmetic transitions cost CPU and GPU; the desktop feels \
                          snappier without them.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![
                tx(
                    Hive::Hkcu,
                    "Control Panel\\Desktop\\WindowMetrics",
                    "MinAnimate",
                    "0",
                ),
                tx(Hive::Hkcu, "Control Panel\\Desktop", "MenuShowDelay", "0"),
            ],
        },
        Tweak {
            id: "visual_fx_performance",
            category: "Visual",
            name: "Set visual effects to best performance",
            description: "Master switch disabling shadows, smooth scrolling, and fades.",
            explanation: "Equivalent to unchecking every option in the performance settings \
                          dialog at once.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\VisualEffects",
                "VisualFXSetting",
                2,
            )],
        },
        Tweak {
            id: "disable_aero_shake",
            category: "Visual",
            name: "Disable shake-to-minimize",
            description: "Prevents accidentally minimizing every other window mid-game.",
            explanation: "Shaking a title bar minimizes everything else, which can steal focus \
                          from a windowed game.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\Explorer\\Advanced",
                "DisallowShaking",
                1,
            )],
        },
        // ======= PRIVACY =======
        Tweak {
            id: "disable_cortana",
            category: "Privacy",
            name: "Disable the voice assistant",
            description: "Stops assistant background services, saving CPU and memory.",
            explanation: "Voice recognition and its indexing hold 50-100 MB of RAM and cause \
                          periodic CPU spikes.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SOFTWARE\\Policies\\Microsoft\\Windows\\Windows Search",
                "AllowCortana",
                0,
            )],
        },
        Tweak {
            id: "disable_telemetry",
            category: "Privacy",
            name: "Minimize telemetry level",
            description: "Sets telemetry to the security-only level, cutting background data \
                          collection.",
            explanation: "Level 0 sends only critical security data, drastically reducing \
                          background network and disk activity.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SOFTWARE\\Policies\\Microsoft\\Windows\\DataCollection",
                "AllowTelemetry",
                0,
            )],
        },
        Tweak {
            id: "disable_activity_history",
            category: "Privacy",
            name: "Disable activity history & timeline",
            description: "Stops activity collection and its periodic disk writes.",
            explanation: "The timeline indexes which apps you use and can sync it to the \
                          cloud.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![
                dw(
                    Hive::Hklm,
                    "SOFTWARE\\Policies\\Microsoft\\Windows\\System",
                    "EnableActivityFeed",
                    0,
                ),
                dw(
                    Hive::Hklm,
                    "SOFTWARE\\Policies\\Microsoft\\Windows\\System",
                    "PublishUserActivities",
                    0,
                ),
            ],
        },
        Tweak {
            id: "disable_location_tracking",
            category: "Privacy",
            name: "Disable location tracking",
            description: "Prevents apps from querying your location.",
            explanation: "Location services periodically scan networks for positioning, \
                          generating background requests.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![tx(
                Hive::Hklm,
                "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\CapabilityAccessManager\\ConsentStore\\location",
                "Value",
                "Deny",
            )],
        },
        Tweak {
            id: "disable_background_apps",
            category: "Privacy",
            name: "Disable background apps",
            description: "Prevents store apps from running in the background.",
            explanation: "Store apps run background tasks even when closed; disabling can \
                          free hundreds of megabytes.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\BackgroundAccessApplications",
                "GlobalUserDisabled",
                1,
            )],
        },
        Tweak {
            id: "disable_tips_notifications",
            category: "Privacy",
            name: "Disable tips & suggestions",
            description: "Stops suggestion pop-ups that can minimize games or steal focus.",
            explanation: "The tips engine creates background activity and its notifications \
                          break fullscreen focus.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![
                dw(Hive::Hkcu, CONTENT_DELIVERY, "SoftLandingEnabled", 0),
                dw(
                    Hive::Hkcu,
                    CONTENT_DELIVERY,
                    "SubscribedContent-338389Enabled",
                    0,
                ),
            ],
        },
        Tweak {
            id: "disable_delivery_optimization",
            category: "Privacy",
            name: "Disable peer-to-peer update uploads",
            description: "Stops uploading update files to other PCs, saving upload bandwidth.",
            explanation: "Uploading update chunks to strangers consumes the upload bandwidth \
                          that keeps your ping stable.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SOFTWARE\\Policies\\Microsoft\\Windows\\DeliveryOptimization",
                "DODownloadMode",
                0,
            )],
        },
        Tweak {
            id: "disable_advertising_id",
            category: "Privacy",
            name: "Disable advertising ID tracking",
            description: "Stops the per-user advertising profile from being maintained.",
            explanation: "The advertising ID pipeline runs periodically in the background to \
                          refresh targeting data.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\AdvertisingInfo",
                "Enabled",
                0,
            )],
        },
        Tweak {
            id: "disable_feedback_frequency",
            category: "Privacy",
            name: "Disable feedback requests",
            description: "Stops periodic rate-this-feature prompts.",
            explanation: "Feedback prompts can minimize fullscreen games and cause focus \
                          loss.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Siuf\\Rules",
                "NumberOfSIUFInPeriod",
                0,
            )],
        },
        Tweak {
            id: "disable_bing_search",
            category: "Privacy",
            name: "Disable web results in local search",
            description: "Keeps start-menu search local, instant, and private.",
            explanation: "Every local search otherwise goes to a web backend first, adding \
                          latency and leaking search terms.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Policies\\Microsoft\\Windows\\Explorer",
                "DisableSearchBoxSuggestions",
                1,
            )],
        },
        // ======= GAMING (input & focus) =======
        Tweak {
            id: "disable_mouse_accel",
            category: "Gaming",
            name: "Disable mouse acceleration",
            description: "Removes the pointer-precision acceleration curve for consistent aim.",
            explanation: "A 1:1 relation between hand and cursor movement is critical for \
                          muscle memory in shooters.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![
                tx(Hive::Hkcu, "Control Panel\\Mouse", "MouseSpeed", "0"),
                tx(Hive::Hkcu, "Control Panel\\Mouse", "MouseThreshold1", "0"),
                tx(Hive::Hkcu, "Control Panel\\Mouse", "MouseThreshold2", "0"),
            ],
        },
        Tweak {
            id: "win32_priority_separation",
            category: "Gaming",
            name: "Optimize foreground app priority",
            description: "Sets Win32PrioritySeparation to 0x26 for maximum foreground \
                          responsiveness.",
            explanation: "0x26 selects short, variable quanta with a high foreground boost; \
                          the default gives minimal foreground priority.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                PRIORITY_CONTROL,
                "Win32PrioritySeparation",
                0x26,
            )],
        },
        Tweak {
            id: "disable_game_mode",
            category: "Gaming",
            name: "Disable automatic Game Mode",
            description: "Gives you manual control instead of automatic scheduling changes.",
            explanation: "Game Mode alters thread scheduling when a game is detected, which \
                          helps some titles and stutters in others.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\GameBar",
                "AutoGameModeEnabled",
                0,
            )],
        },
        Tweak {
            id: "disable_notifications_fullscreen",
            category: "Gaming",
            name: "Disable notifications during fullscreen",
            description: "Stops toasts from stealing focus or dropping frames mid-game.",
            explanation: "A toast triggers a composition cycle that drops frames and can \
                          break exclusive fullscreen.",
            risk: Risk::Safe,
            needs_elevation: false,
            actions: vec![dw(
                Hive::Hkcu,
                "Software\\Microsoft\\Windows\\CurrentVersion\\Notifications\\Settings",
                "NOC_GLOBAL_SETTING_ALLOW_TOASTS_ABOVE_LOCK",
                0,
            )],
        },
        // ======= STORAGE =======
        Tweak {
            id: "disable_ntfs_last_access",
            category: "Storage",
            name: "Disable NTFS last-access timestamp updates",
            description: "Stops a metadata write on every file read.",
            explanation: "Reading thousands of game assets otherwise generates thousands of \
                          timestamp writes per second.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                FILESYSTEM,
                "NtfsDisableLastAccessUpdate",
                0x8000_0003,
            )],
        },
        Tweak {
            id: "disable_8dot3_names",
            category: "Storage",
            name: "Disable 8.3 legacy filename creation",
            description: "Skips generating short DOS-compatible names for every file.",
            explanation: "The secondary short name adds overhead to every file operation and \
                          nothing modern needs it.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, FILESYSTEM, "NtfsDisable8dot3NameCreation", 1)],
        },
        // ======= POWER (core parking) =======
        Tweak {
            id: "disable_core_parking",
            category: "Power",
            name: "Disable CPU core parking",
            description: "Keeps all cores awake instead of sleeping idle ones.",
            explanation: "Waking a parked core takes time; sudden thread demand then shows up \
                          as micro-stutter. Zero percent parked keeps everything active.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control\\Power\\PowerSettings\\54533251-82be-4824-96c1-47b60b740d00\\0cc5b647-c1df-4637-891a-dec35c318583",
                "ValueMax",
                0,
            )],
        },
        // ======= MEMORY =======
        Tweak {
            id: "disable_memory_compression",
            category: "Memory",
            name: "Disable memory compression",
            description: "Stops compressing idle pages, trading RAM for CPU cycles.",
            explanation: "With 16 GB or more there is enough RAM that compression only burns \
                          CPU.",
            risk: Risk::Advanced,
            needs_elevation: true,
            actions: vec![dw(Hive::Hklm, MEMORY_MANAGEMENT, "DisableCompression", 1)],
        },
        Tweak {
            id: "svchost_split_threshold",
            category: "Memory",
            name: "Optimize service host split threshold",
            description: "Lets services share host processes instead of one process each.",
            explanation: "Per-service isolation costs roughly 200 MB; raising the threshold \
                          to total RAM restores sharing.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Control",
                "SvcHostSplitThresholdInKB",
                67_108_864,
            )],
        },
        Tweak {
            id: "ndu_disable",
            category: "Memory",
            name: "Disable the network usage monitor driver",
            description: "Stops the per-app network tracking driver with a known memory leak.",
            explanation: "The usage-tracking driver can leak gigabytes of non-paged pool over \
                          long uptimes.",
            risk: Risk::Safe,
            needs_elevation: true,
            actions: vec![dw(
                Hive::Hklm,
                "SYSTEM\\CurrentControlSet\\Services\\Ndu",
                "Start",
                4,
            )],
        },
    ]
}

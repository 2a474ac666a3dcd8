/// 示例题库
///
/// 按类别组织的内置示例查询，宿主应用壳将其渲染为可点击的
/// 示例标签，点击后直接回填输入框提交求解
#[derive(Debug, Clone, Copy)]
pub struct ExampleCategory {
    /// 类别名称
    pub name: &'static str,
    /// 类别下的示例查询
    pub queries: &'static [&'static str],
}

/// 全部示例类别（按展示顺序）
pub const EXAMPLE_CATEGORIES: &[ExampleCategory] = &[
    ExampleCategory {
        name: "Physics 🚀",
        queries: &[
            "projectile velocity 50 angle 45",
            "projectile velocity 100 angle 30",
            "projectile velocity 20 angle 60",
        ],
    },
    ExampleCategory {
        name: "Calculus ∫",
        queries: &[
            "derivative x**3 - 2*x + 5",
            "derivative sin(x) * x",
            "derivative (x+1)/(x-1)",
            "integrate x**2",
            "integrate cos(x)",
            "integrate x * exp(x)",
        ],
    },
    ExampleCategory {
        name: "Algebra 📐",
        queries: &[
            "x**2 - 9 = 0",
            "3*x + 5 = 20",
            "x**3 - x = 0",
            "simplify (x+2)**2",
            "expand (x+1)*(x-1)",
        ],
    },
    ExampleCategory {
        name: "Geometry & 3D 🧊",
        queries: &[
            "hypotenuse sides 3 4",
            "hypotenuse sides 5 12",
            "sphere radius 5",
            "distance 3d (0,0,0) (1,1,1)",
        ],
    },
    ExampleCategory {
        name: "Metric Spaces 📏",
        queries: &[
            "distance euclidean (0,0) (3,4)",
            "distance taxicab (0,0) (3,4)",
            "distance chebyshev (0,0) (3,4)",
        ],
    },
];

/// 按名称查找示例类别
pub fn find_category(name: &str) -> Option<&'static ExampleCategory> {
    EXAMPLE_CATEGORIES.iter().find(|c| c.name == name)
}
